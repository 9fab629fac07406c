//! Percent value object for profit/loss ratios.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A return ratio expressed as a fraction (0.25 = 25%).
///
/// Always rounded to 4 decimal places on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    /// Decimal places kept for ratios.
    pub const SCALE: u32 = 4;

    /// Zero percent.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Percent, rounded to 4 places.
    #[must_use]
    pub fn new(ratio: Decimal) -> Self {
        Self(ratio.round_dp(Self::SCALE))
    }

    /// Ratio of `numerator` to `denominator`, or zero when the denominator is zero.
    #[must_use]
    pub fn ratio(numerator: Decimal, denominator: Decimal) -> Self {
        if denominator.is_zero() {
            return Self::ZERO;
        }
        Self::new(numerator / denominator)
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Floating-point view for reporting boundaries.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Scale by a sign or factor, keeping 4 places.
    #[must_use]
    pub fn scaled(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for Percent {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0 * Decimal::ONE_HUNDRED)
    }
}

impl From<Percent> for Decimal {
    fn from(value: Percent) -> Self {
        value.0
    }
}
