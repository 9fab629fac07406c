//! Option Contract Value Object

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::option_position::errors::OptionPositionError;
use crate::domain::shared::{ContractId, DomainError, Symbol};

/// Underlying units per contract; premium and P&L are quoted per share.
pub const CONTRACT_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

/// Option right (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionRight {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "CALL"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

/// Option contract terms.
///
/// Set once when a position is created and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Identifier supplied by the data source.
    contract_id: ContractId,
    /// Underlying symbol.
    symbol: Symbol,
    /// Strike price.
    strike: Decimal,
    /// Expiration date and time.
    expiration: NaiveDateTime,
    /// Call or put.
    right: OptionRight,
}

impl OptionContract {
    /// Start building a contract; every field is required.
    #[must_use]
    pub fn builder() -> OptionContractBuilder {
        OptionContractBuilder::default()
    }

    /// Create a validated contract from all of its fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank id, invalid symbol or
    /// non-positive strike.
    pub fn new(
        contract_id: impl Into<ContractId>,
        symbol: impl Into<Symbol>,
        strike: Decimal,
        expiration: NaiveDateTime,
        right: OptionRight,
    ) -> Result<Self, OptionPositionError> {
        Self::builder()
            .contract_id(contract_id)
            .symbol(symbol)
            .strike(strike)
            .expiration(expiration)
            .right(right)
            .build()
    }

    /// Create a call option contract.
    ///
    /// # Errors
    ///
    /// See [`OptionContract::new`].
    pub fn call(
        contract_id: impl Into<ContractId>,
        symbol: impl Into<Symbol>,
        strike: Decimal,
        expiration: NaiveDateTime,
    ) -> Result<Self, OptionPositionError> {
        Self::new(contract_id, symbol, strike, expiration, OptionRight::Call)
    }

    /// Create a put option contract.
    ///
    /// # Errors
    ///
    /// See [`OptionContract::new`].
    pub fn put(
        contract_id: impl Into<ContractId>,
        symbol: impl Into<Symbol>,
        strike: Decimal,
        expiration: NaiveDateTime,
    ) -> Result<Self, OptionPositionError> {
        Self::new(contract_id, symbol, strike, expiration, OptionRight::Put)
    }

    /// Get the contract identifier.
    #[must_use]
    pub const fn contract_id(&self) -> &ContractId {
        &self.contract_id
    }

    /// Get the underlying symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Get the strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Get the expiration date and time.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDateTime {
        self.expiration
    }

    /// Get the expiration calendar date.
    #[must_use]
    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration.date()
    }

    /// Get the option right.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.right
    }

    /// Check if this is a call option.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self.right, OptionRight::Call)
    }

    /// Check if this is a put option.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self.right, OptionRight::Put)
    }

    /// In the money at `spot`. Exact equality counts as in the money for both rights.
    #[must_use]
    pub fn is_itm_at(&self, spot: Decimal) -> bool {
        match self.right {
            OptionRight::Call => spot >= self.strike,
            OptionRight::Put => spot <= self.strike,
        }
    }

    /// Out of the money at `spot`; strict inequality for both rights.
    #[must_use]
    pub fn is_otm_at(&self, spot: Decimal) -> bool {
        match self.right {
            OptionRight::Call => spot < self.strike,
            OptionRight::Put => spot > self.strike,
        }
    }

    /// Intrinsic value per share at `spot`, floored at zero.
    #[must_use]
    pub fn intrinsic_value(&self, spot: Decimal) -> Decimal {
        let raw = match self.right {
            OptionRight::Call => spot - self.strike,
            OptionRight::Put => self.strike - spot,
        };
        raw.max(Decimal::ZERO)
    }
}

impl std::fmt::Display for OptionContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.right,
            self.symbol,
            self.strike.normalize(),
            self.expiration.format("%Y-%m-%d")
        )
    }
}

/// Builder that reports the first missing contract field.
#[derive(Debug, Clone, Default)]
pub struct OptionContractBuilder {
    contract_id: Option<ContractId>,
    symbol: Option<Symbol>,
    strike: Option<Decimal>,
    expiration: Option<NaiveDateTime>,
    right: Option<OptionRight>,
}

impl OptionContractBuilder {
    /// Set the contract identifier.
    #[must_use]
    pub fn contract_id(mut self, contract_id: impl Into<ContractId>) -> Self {
        self.contract_id = Some(contract_id.into());
        self
    }

    /// Set the underlying symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the strike price.
    #[must_use]
    pub const fn strike(mut self, strike: Decimal) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Set the expiration date and time.
    #[must_use]
    pub const fn expiration(mut self, expiration: NaiveDateTime) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Set call or put.
    #[must_use]
    pub const fn right(mut self, right: OptionRight) -> Self {
        self.right = Some(right);
        self
    }

    /// Validate and build the contract.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first missing or invalid field.
    pub fn build(self) -> Result<OptionContract, OptionPositionError> {
        let contract_id = required(self.contract_id, "contract_id")?;
        let symbol = required(self.symbol, "symbol")?;
        let strike = required(self.strike, "strike")?;
        let expiration = required(self.expiration, "expiration")?;
        let right = required(self.right, "option_type")?;

        if contract_id.is_blank() {
            return Err(OptionPositionError::validation(
                "contract_id",
                "contract_id cannot be blank",
            ));
        }
        symbol.validate()?;
        if strike <= Decimal::ZERO {
            return Err(OptionPositionError::validation(
                "strike",
                format!("strike must be positive, got {strike}"),
            ));
        }

        Ok(OptionContract {
            contract_id,
            symbol,
            strike,
            expiration,
            right,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::MissingValue {
        field: field.to_string(),
    })
}
