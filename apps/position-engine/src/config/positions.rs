//! Position defaults.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::domain::option_position::PositionSettings;
use crate::domain::shared::Money;

const CUTOFF_FORMAT: &str = "%H:%M";

/// Defaults applied to every new position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionsConfig {
    /// Fee per contract, charged on open and on each close.
    #[serde(default)]
    pub fee_per_contract: Decimal,
    /// Expiration-day time (`HH:MM`) from which an option counts as expired.
    #[serde(default = "default_expiration_cutoff")]
    pub expiration_cutoff: String,
    /// Reject quote updates older than the current quote.
    #[serde(default = "default_true")]
    pub enforce_quote_order: bool,
}

impl Default for PositionsConfig {
    fn default() -> Self {
        Self {
            fee_per_contract: Decimal::ZERO,
            expiration_cutoff: default_expiration_cutoff(),
            enforce_quote_order: true,
        }
    }
}

impl PositionsConfig {
    /// Validate the section.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative fee or malformed cutoff.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fee_per_contract < Decimal::ZERO {
            return Err(ConfigError::ValidationError(format!(
                "fee_per_contract must be zero or positive, got {}",
                self.fee_per_contract
            )));
        }
        self.parse_cutoff()?;
        Ok(())
    }

    /// Convert into the settings handed to [`crate::OptionPosition::new`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if the section is invalid.
    pub fn to_settings(&self) -> Result<PositionSettings, ConfigError> {
        self.validate()?;
        Ok(PositionSettings {
            fee_per_contract: Money::new(self.fee_per_contract),
            expiration_cutoff: self.parse_cutoff()?,
            enforce_quote_order: self.enforce_quote_order,
        })
    }

    fn parse_cutoff(&self) -> Result<NaiveTime, ConfigError> {
        NaiveTime::parse_from_str(&self.expiration_cutoff, CUTOFF_FORMAT).map_err(|e| {
            ConfigError::ValidationError(format!(
                "expiration_cutoff '{}' is not HH:MM: {e}",
                self.expiration_cutoff
            ))
        })
    }
}

fn default_expiration_cutoff() -> String {
    "16:15".to_string()
}

const fn default_true() -> bool {
    true
}
