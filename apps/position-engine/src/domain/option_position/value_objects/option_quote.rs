//! Option Quote Value Object
//!
//! A quote is all-or-nothing: either the five fields are present together or
//! the position has no quote at all. [`QuoteFields`] is the loosely-typed
//! input used at the boundary; [`OptionQuote`] is the validated record.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, Money};

/// Market quote snapshot for a single contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Data timestamp.
    quote_date: NaiveDateTime,
    /// Underlying price at `quote_date`, kept at full precision.
    spot_price: Decimal,
    /// Best bid.
    bid: Money,
    /// Best ask.
    ask: Money,
    /// Mid / settlement price.
    price: Money,
}

impl OptionQuote {
    /// Largest amount accepted for any quoted price.
    pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

    /// Create a quote; option prices are rounded to cents, spot is kept as
    /// given so moneyness compares the exact underlying price.
    ///
    /// # Errors
    ///
    /// Returns error if any amount is negative or above
    /// [`OptionQuote::MAX_AMOUNT`].
    pub fn new(
        quote_date: NaiveDateTime,
        spot_price: Decimal,
        bid: Decimal,
        ask: Decimal,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            quote_date,
            spot_price: validate_amount("spot_price", spot_price)?,
            bid: Money::new(validate_amount("bid", bid)?),
            ask: Money::new(validate_amount("ask", ask)?),
            price: Money::new(validate_amount("price", price)?),
        })
    }

    /// Get the quote timestamp.
    #[must_use]
    pub const fn quote_date(&self) -> NaiveDateTime {
        self.quote_date
    }

    /// Get the underlying spot price.
    #[must_use]
    pub const fn spot_price(&self) -> Decimal {
        self.spot_price
    }

    /// Get the bid.
    #[must_use]
    pub const fn bid(&self) -> Money {
        self.bid
    }

    /// Get the ask.
    #[must_use]
    pub const fn ask(&self) -> Money {
        self.ask
    }

    /// Get the mid / settlement price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }
}

fn validate_amount(field: &str, amount: Decimal) -> Result<Decimal, DomainError> {
    if amount < Decimal::ZERO {
        return Err(DomainError::InvalidValue {
            field: field.to_string(),
            message: "must be zero or a positive amount".to_string(),
        });
    }
    if amount > Decimal::from(OptionQuote::MAX_AMOUNT) {
        return Err(DomainError::InvalidValue {
            field: field.to_string(),
            message: format!("{amount} exceeds the limit of {}", OptionQuote::MAX_AMOUNT),
        });
    }
    Ok(amount)
}

/// Quote input where any field may be missing.
///
/// Mirrors what a loader hands over before validation. Resolving it enforces
/// the all-or-nothing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteFields {
    /// Data timestamp.
    pub quote_date: Option<NaiveDateTime>,
    /// Underlying price.
    pub spot_price: Option<Decimal>,
    /// Best bid.
    pub bid: Option<Decimal>,
    /// Best ask.
    pub ask: Option<Decimal>,
    /// Mid / settlement price.
    pub price: Option<Decimal>,
}

impl QuoteFields {
    /// No quote at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            quote_date: None,
            spot_price: None,
            bid: None,
            ask: None,
            price: None,
        }
    }

    /// Every field present.
    #[must_use]
    pub const fn new(
        quote_date: NaiveDateTime,
        spot_price: Decimal,
        bid: Decimal,
        ask: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            quote_date: Some(quote_date),
            spot_price: Some(spot_price),
            bid: Some(bid),
            ask: Some(ask),
            price: Some(price),
        }
    }

    /// Returns true if no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.quote_date.is_none()
            && self.spot_price.is_none()
            && self.bid.is_none()
            && self.ask.is_none()
            && self.price.is_none()
    }

    /// Resolve into no quote (all absent) or a complete quote (all present).
    ///
    /// # Errors
    ///
    /// Returns error naming the first missing field when only some fields
    /// are present, or when an amount is invalid.
    pub fn resolve(self) -> Result<Option<OptionQuote>, DomainError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.require().map(Some)
    }

    /// Resolve into a complete quote.
    ///
    /// # Errors
    ///
    /// Returns error naming the first missing field, or when an amount is
    /// invalid.
    pub fn require(self) -> Result<OptionQuote, DomainError> {
        let missing = |field: &str| DomainError::MissingValue {
            field: field.to_string(),
        };
        let quote_date = self.quote_date.ok_or_else(|| missing("quote_date"))?;
        let spot_price = self.spot_price.ok_or_else(|| missing("spot_price"))?;
        let bid = self.bid.ok_or_else(|| missing("bid"))?;
        let ask = self.ask.ok_or_else(|| missing("ask"))?;
        let price = self.price.ok_or_else(|| missing("price"))?;

        OptionQuote::new(quote_date, spot_price, bid, ask, price)
    }
}

impl From<OptionQuote> for QuoteFields {
    fn from(quote: OptionQuote) -> Self {
        Self::new(
            quote.quote_date,
            quote.spot_price,
            quote.bid.amount(),
            quote.ask.amount(),
            quote.price.amount(),
        )
    }
}
