//! Quantity value object for option contract counts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use crate::domain::shared::DomainError;

/// A signed number of option contracts.
///
/// Positive quantities are long exposure, negative quantities short.
/// Represented as a Decimal so that fractional input can be detected and
/// rejected rather than silently truncated; validated quantities are whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Zero quantity.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest number of contracts a single trade may carry.
    pub const MAX_CONTRACTS: i64 = 1_000_000_000;

    /// Create a new Quantity from a Decimal (not rounded).
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Quantity from an integer.
    #[must_use]
    pub fn from_i64(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this quantity is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this quantity is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this quantity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the quantity has no fractional part.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Get the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Sign of the quantity as -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> Decimal {
        match self.0.cmp(&Decimal::ZERO) {
            Ordering::Greater => Decimal::ONE,
            Ordering::Less => Decimal::NEGATIVE_ONE,
            Ordering::Equal => Decimal::ZERO,
        }
    }

    /// Validate a quantity used to open or close contracts.
    ///
    /// # Errors
    ///
    /// Returns error if the quantity is zero, not a whole number, or larger
    /// than [`Quantity::MAX_CONTRACTS`] in magnitude.
    pub fn validate_contracts(&self) -> Result<(), DomainError> {
        if !self.is_whole() {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: format!("quantity must be a whole number of contracts, got {}", self.0),
            });
        }
        if self.is_zero() {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "quantity must be a non-zero number of contracts".to_string(),
            });
        }
        if self.0.abs() > Decimal::from(Self::MAX_CONTRACTS) {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: format!(
                    "quantity {} exceeds the limit of {} contracts",
                    self.0,
                    Self::MAX_CONTRACTS
                ),
            });
        }
        Ok(())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0.trunc())
        } else {
            write!(f, "{}", self.0.normalize())
        }
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<Quantity> for Decimal {
    fn from(value: Quantity) -> Self {
        value.0
    }
}
