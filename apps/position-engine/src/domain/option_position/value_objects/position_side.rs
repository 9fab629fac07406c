//! Position Side Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Quantity;

/// Position side (long or short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionSide {
    /// Long position (bought to open, sold to close).
    Long,
    /// Short position (sold to open, bought to close).
    Short,
}

impl PositionSide {
    /// Side implied by a signed opening quantity; `None` for zero.
    #[must_use]
    pub fn from_quantity(quantity: Quantity) -> Option<Self> {
        if quantity.is_positive() {
            Some(Self::Long)
        } else if quantity.is_negative() {
            Some(Self::Short)
        } else {
            None
        }
    }

    /// Get the sign multiplier for this side.
    #[must_use]
    pub const fn sign(&self) -> Decimal {
        match self {
            Self::Long => Decimal::ONE,
            Self::Short => Decimal::NEGATIVE_ONE,
        }
    }

    /// Check if this is a long position.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_from_quantity() {
        assert_eq!(
            PositionSide::from_quantity(Quantity::from_i64(3)),
            Some(PositionSide::Long)
        );
        assert_eq!(
            PositionSide::from_quantity(Quantity::from_i64(-3)),
            Some(PositionSide::Short)
        );
        assert_eq!(PositionSide::from_quantity(Quantity::ZERO), None);
    }

    #[test]
    fn side_sign() {
        assert_eq!(PositionSide::Long.sign(), Decimal::ONE);
        assert_eq!(PositionSide::Short.sign(), Decimal::NEGATIVE_ONE);
        assert!(PositionSide::Long.is_long());
        assert!(!PositionSide::Short.is_long());
    }

    #[test]
    fn side_display_and_serde() {
        assert_eq!(PositionSide::Short.to_string(), "SHORT");
        let json = serde_json::to_string(&PositionSide::Long).unwrap();
        assert_eq!(json, "\"LONG\"");
    }
}
