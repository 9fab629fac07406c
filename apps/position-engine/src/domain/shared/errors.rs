//! Domain errors shared by value objects.

use thiserror::Error;

/// Errors raised while constructing or validating shared value objects.
///
/// These errors are independent of infrastructure concerns. Bounded contexts
/// convert them into their own error types at the aggregate boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required value was not supplied.
    #[error("Missing required value for '{field}'")]
    MissingValue {
        /// Field name.
        field: String,
    },

    /// Invalid value for a field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl DomainError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingValue { field } | Self::InvalidValue { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_missing_value_display() {
        let err = DomainError::MissingValue {
            field: "strike".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required value for 'strike'");
        assert_eq!(err.field(), "strike");
    }

    #[test]
    fn domain_error_invalid_value_display() {
        let err = DomainError::InvalidValue {
            field: "quantity".to_string(),
            message: "must be a whole number".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("quantity"));
        assert!(msg.contains("whole number"));
        assert_eq!(err.field(), "quantity");
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::InvalidValue {
            field: "test".to_string(),
            message: "test".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
