//! Per-position settings supplied at creation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// Market close used for PM-settled expiration checks (16:15).
#[must_use]
pub fn default_expiration_cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(16, 15, 0).unwrap_or_default()
}

/// Settings that shape fee accrual, expiration and quote checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSettings {
    /// Fee charged per contract on each open or close that accrues fees.
    pub fee_per_contract: Money,
    /// Time of day on the expiration date from which the option counts as expired.
    pub expiration_cutoff: NaiveTime,
    /// Reject quote updates dated before the current quote.
    pub enforce_quote_order: bool,
}

impl PositionSettings {
    /// Settings with a fee rate and defaults otherwise.
    #[must_use]
    pub fn with_fee(fee_per_contract: Money) -> Self {
        Self {
            fee_per_contract,
            ..Self::default()
        }
    }
}

impl Default for PositionSettings {
    fn default() -> Self {
        Self {
            fee_per_contract: Money::ZERO,
            expiration_cutoff: default_expiration_cutoff(),
            enforce_quote_order: true,
        }
    }
}
