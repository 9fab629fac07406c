//! Option Position Errors

use thiserror::Error;

use crate::domain::shared::DomainError;

/// Errors that can occur with option positions.
///
/// Every error is surfaced synchronously to the caller; the position never
/// retries or repairs invalid input on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionPositionError {
    /// Malformed or missing input.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Offending field.
        field: String,
        /// Error message.
        message: String,
    },

    /// Operation invoked in a state that forbids it.
    #[error("Cannot {operation}: {message}")]
    InvalidState {
        /// Operation that was attempted.
        operation: String,
        /// Why the current state forbids it.
        message: String,
    },
}

impl OptionPositionError {
    /// Build a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a state error.
    #[must_use]
    pub fn invalid_state(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidState {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Returns true for input validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true for state failures.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

impl From<DomainError> for OptionPositionError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingValue { field } => Self::Validation {
                message: format!("{field} is required"),
                field,
            },
            DomainError::InvalidValue { field, message } => Self::Validation { field, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OptionPositionError::validation("quantity", "must be non-zero");
        assert_eq!(err.to_string(), "Invalid quantity: must be non-zero");
        assert!(err.is_validation());

        let err = OptionPositionError::invalid_state("close trade", "no trade is open");
        assert_eq!(err.to_string(), "Cannot close trade: no trade is open");
        assert!(err.is_invalid_state());
    }

    #[test]
    fn from_domain_error_missing_value() {
        let err: OptionPositionError = DomainError::MissingValue {
            field: "bid".to_string(),
        }
        .into();
        assert_eq!(
            err,
            OptionPositionError::validation("bid", "bid is required")
        );
    }

    #[test]
    fn from_domain_error_invalid_value() {
        let err: OptionPositionError = DomainError::InvalidValue {
            field: "strike".to_string(),
            message: "must be positive".to_string(),
        }
        .into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("strike"));
    }
}
