//! Option Position Aggregate Root
//!
//! The position owns one contract, its latest quote and analytics, the
//! single opening trade and every closing slice. It is the only place where
//! the open/close state machine and fee accrual live.
//!
//! Every mutating method validates its inputs and computes all derived
//! values before touching state; a rejected call leaves the position exactly
//! as it was.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::PositionSettings;
use crate::domain::option_position::errors::OptionPositionError;
use crate::domain::option_position::value_objects::{
    Annotations, CONTRACT_MULTIPLIER, ExtendedProperties, Greeks, OptionContract, OptionQuote,
    PositionSide, QuoteFields, TradeClose, TradeOpen,
};
use crate::domain::shared::{Money, Percent, PositionId, Quantity};

mod valuation;

/// A single option contract and its trade lifecycle.
///
/// Serializes for reporting; it is only ever built through [`OptionPosition::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionPosition {
    id: PositionId,
    contract: OptionContract,
    quote: Option<OptionQuote>,
    greeks: Option<Greeks>,
    extended_properties: Option<ExtendedProperties>,
    trade_open: Option<TradeOpen>,
    trade_closes: Vec<TradeClose>,
    quantity: Quantity,
    side: Option<PositionSide>,
    total_fees: Money,
    settings: PositionSettings,
    annotations: Annotations,
}

impl OptionPosition {
    /// Create a position for a contract, optionally with an initial quote
    /// and analytics.
    ///
    /// Empty `Greeks` / `ExtendedProperties` snapshots are stored as absent.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the quote is partially populated, dated
    /// past expiration, or if the fee rate is negative.
    pub fn new(
        contract: OptionContract,
        quote: QuoteFields,
        greeks: Option<Greeks>,
        extended_properties: Option<ExtendedProperties>,
        settings: PositionSettings,
    ) -> Result<Self, OptionPositionError> {
        settings
            .fee_per_contract
            .validate_non_negative("fee_per_contract")?;
        let quote = quote.resolve()?;
        if let Some(quote) = &quote {
            ensure_not_past_expiration(&contract, quote)?;
        }

        let position = Self {
            id: PositionId::generate(),
            contract,
            quote,
            greeks: greeks.and_then(Greeks::non_empty),
            extended_properties: extended_properties.and_then(ExtendedProperties::non_empty),
            trade_open: None,
            trade_closes: Vec::new(),
            quantity: Quantity::ZERO,
            side: None,
            total_fees: Money::ZERO,
            settings,
            annotations: Annotations::new(),
        };

        debug!(
            position_id = %position.id,
            contract = %position.contract,
            has_quote = position.quote.is_some(),
            "Option position created"
        );

        Ok(position)
    }

    /// Replace the quote and analytics wholesale.
    ///
    /// Empty `Greeks` / `ExtendedProperties` snapshots are stored as absent.
    /// Trade history is untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any quote field is missing, the quote is
    /// past expiration, or (when ordering is enforced) it is older than the
    /// current quote.
    pub fn update(
        &mut self,
        quote: QuoteFields,
        greeks: Option<Greeks>,
        extended_properties: Option<ExtendedProperties>,
    ) -> Result<(), OptionPositionError> {
        let quote = quote.require()?;
        ensure_not_past_expiration(&self.contract, &quote)?;

        if self.settings.enforce_quote_order
            && let Some(current) = self
                .quote
                .filter(|current| quote.quote_date() < current.quote_date())
        {
            warn!(
                contract_id = %self.contract.contract_id(),
                current = %current.quote_date(),
                received = %quote.quote_date(),
                "Out-of-order quote rejected"
            );
            return Err(OptionPositionError::validation(
                "quote_date",
                format!(
                    "quote date {} is earlier than the current quote date {}",
                    quote.quote_date(),
                    current.quote_date()
                ),
            ));
        }

        self.quote = Some(quote);
        self.greeks = greeks.and_then(Greeks::non_empty);
        self.extended_properties = extended_properties.and_then(ExtendedProperties::non_empty);

        debug!(
            contract_id = %self.contract.contract_id(),
            quote_date = %quote.quote_date(),
            price = %quote.price(),
            spot = %quote.spot_price(),
            "Quote updated"
        );

        Ok(())
    }

    /// Open the position at the current quote price.
    ///
    /// A positive quantity opens a long, a negative one a short. A position
    /// is opened at most once; it cannot be reopened after a full close.
    ///
    /// # Errors
    ///
    /// Returns a state error without a quote or when a trade was already
    /// opened, and a validation error for a zero, fractional or oversized
    /// quantity, or when the premium or fees leave the representable range.
    pub fn open_trade(
        &mut self,
        quantity: impl Into<Quantity>,
        incur_fees: bool,
    ) -> Result<TradeOpen, OptionPositionError> {
        const OPERATION: &str = "open trade";

        let quantity = quantity.into();
        if self.trade_open.is_some() {
            return Err(OptionPositionError::invalid_state(
                OPERATION,
                "a trade has already been opened on this position",
            ));
        }
        let quote = self.quote.ok_or_else(|| {
            OptionPositionError::invalid_state(OPERATION, "the position has no quote")
        })?;
        quantity.validate_contracts()?;
        let side = PositionSide::from_quantity(quantity).ok_or_else(|| {
            OptionPositionError::validation("quantity", "quantity must be non-zero")
        })?;

        let price = quote.price();
        let premium = contract_value(price, quantity).ok_or_else(|| out_of_range("quantity"))?;
        let fees = self.fees_for(quantity, incur_fees)?;
        let total_fees = self.accrue(fees)?;
        let trade_open = TradeOpen::new(quote.quote_date(), quantity, price, premium, fees);

        self.trade_open = Some(trade_open);
        self.quantity = quantity;
        self.side = Some(side);
        self.total_fees = total_fees;

        info!(
            contract_id = %self.contract.contract_id(),
            side = %side,
            quantity = %quantity,
            price = %price,
            premium = %premium,
            fees = %fees,
            "Trade opened"
        );

        Ok(trade_open)
    }

    /// Close some or all of the open contracts at the closing price.
    ///
    /// `None` closes everything still open. A long closes with a positive
    /// quantity, a short with a negative one; the recorded slice carries the
    /// opposite sign.
    ///
    /// # Errors
    ///
    /// Returns a state error when nothing is open, and a validation error for
    /// a zero, fractional, wrong-signed or oversized quantity.
    pub fn close_trade(
        &mut self,
        quantity: Option<Quantity>,
        incur_fees: bool,
    ) -> Result<TradeClose, OptionPositionError> {
        const OPERATION: &str = "close trade";

        let (Some(trade_open), Some(side)) = (self.trade_open, self.side) else {
            return Err(OptionPositionError::invalid_state(
                OPERATION,
                "no trade has been opened",
            ));
        };
        if !self.is_open() {
            return Err(OptionPositionError::invalid_state(
                OPERATION,
                "all contracts have already been closed",
            ));
        }

        let requested = quantity.unwrap_or(self.quantity);
        requested.validate_contracts()?;
        if requested.signum() != side.sign() {
            let expected = if side.is_long() { "positive" } else { "negative" };
            return Err(OptionPositionError::validation(
                "quantity",
                format!("a {side} position must be closed with a {expected} quantity, got {requested}"),
            ));
        }
        if requested.abs() > self.quantity.abs() {
            warn!(
                contract_id = %self.contract.contract_id(),
                requested = %requested,
                open = %self.quantity,
                "Close quantity exceeds open contracts"
            );
            return Err(OptionPositionError::validation(
                "quantity",
                format!(
                    "cannot close {} contracts, only {} remain open",
                    requested.abs(),
                    self.quantity.abs()
                ),
            ));
        }

        let quote = self.require_quote(OPERATION)?;
        let close_price = self.closing_price()?;
        let open_price = trade_open.price();
        let closed = -requested;
        let profit_loss = contract_value(open_price - close_price, closed)
            .ok_or_else(|| out_of_range("quantity"))?;
        let profit_loss_percent =
            Percent::ratio((close_price - open_price).amount(), open_price.amount())
                .scaled(side.sign());
        let fees = self.fees_for(requested, incur_fees)?;
        let total_fees = self.accrue(fees)?;
        let trade_close = TradeClose::new(
            quote.quote_date(),
            closed,
            close_price,
            profit_loss,
            profit_loss_percent,
            fees,
        );

        self.trade_closes.push(trade_close);
        self.quantity = self.quantity - requested;
        self.total_fees = total_fees;

        info!(
            contract_id = %self.contract.contract_id(),
            quantity = %closed,
            price = %close_price,
            profit_loss = %profit_loss,
            fees = %fees,
            remaining = %self.quantity,
            "Trade closed"
        );

        Ok(trade_close)
    }

    /// Change the fee charged per contract on later opens and closes.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative rate.
    pub fn set_fee_per_contract(&mut self, fee_per_contract: Money) -> Result<(), OptionPositionError> {
        fee_per_contract.validate_non_negative("fee_per_contract")?;
        self.settings.fee_per_contract = fee_per_contract;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Position identifier.
    #[must_use]
    pub const fn id(&self) -> &PositionId {
        &self.id
    }

    /// The contract this position holds.
    #[must_use]
    pub const fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Current quote, if any.
    #[must_use]
    pub const fn quote(&self) -> Option<&OptionQuote> {
        self.quote.as_ref()
    }

    /// Current Greeks, if supplied on creation or the last update.
    #[must_use]
    pub const fn greeks(&self) -> Option<&Greeks> {
        self.greeks.as_ref()
    }

    /// Current extended analytics, if supplied on creation or the last update.
    #[must_use]
    pub const fn extended_properties(&self) -> Option<&ExtendedProperties> {
        self.extended_properties.as_ref()
    }

    /// The opening trade, once opened.
    #[must_use]
    pub const fn trade_open(&self) -> Option<&TradeOpen> {
        self.trade_open.as_ref()
    }

    /// Closing slices in the order they were recorded.
    #[must_use]
    pub fn trade_closes(&self) -> &[TradeClose] {
        &self.trade_closes
    }

    /// Signed net-open quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Long or short; `None` before the trade is opened.
    #[must_use]
    pub const fn side(&self) -> Option<PositionSide> {
        self.side
    }

    /// Fees accrued across the open and every close.
    #[must_use]
    pub const fn total_fees(&self) -> Money {
        self.total_fees
    }

    /// Fee charged per contract.
    #[must_use]
    pub const fn fee_per_contract(&self) -> Money {
        self.settings.fee_per_contract
    }

    /// Settings the position was created with.
    #[must_use]
    pub const fn settings(&self) -> &PositionSettings {
        &self.settings
    }

    /// Caller annotations.
    #[must_use]
    pub const fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    /// Mutable caller annotations.
    pub fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }

    // Quote, Greeks and extended members; absent with their group.

    /// Quote timestamp.
    #[must_use]
    pub fn quote_date(&self) -> Option<chrono::NaiveDateTime> {
        self.quote.map(|q| q.quote_date())
    }

    /// Underlying spot price.
    #[must_use]
    pub fn spot_price(&self) -> Option<rust_decimal::Decimal> {
        self.quote.map(|q| q.spot_price())
    }

    /// Best bid.
    #[must_use]
    pub fn bid(&self) -> Option<Money> {
        self.quote.map(|q| q.bid())
    }

    /// Best ask.
    #[must_use]
    pub fn ask(&self) -> Option<Money> {
        self.quote.map(|q| q.ask())
    }

    /// Mid / settlement price.
    #[must_use]
    pub fn price(&self) -> Option<Money> {
        self.quote.map(|q| q.price())
    }

    /// Delta.
    #[must_use]
    pub fn delta(&self) -> Option<rust_decimal::Decimal> {
        self.greeks.and_then(|g| g.delta)
    }

    /// Gamma.
    #[must_use]
    pub fn gamma(&self) -> Option<rust_decimal::Decimal> {
        self.greeks.and_then(|g| g.gamma)
    }

    /// Theta.
    #[must_use]
    pub fn theta(&self) -> Option<rust_decimal::Decimal> {
        self.greeks.and_then(|g| g.theta)
    }

    /// Vega.
    #[must_use]
    pub fn vega(&self) -> Option<rust_decimal::Decimal> {
        self.greeks.and_then(|g| g.vega)
    }

    /// Rho.
    #[must_use]
    pub fn rho(&self) -> Option<rust_decimal::Decimal> {
        self.greeks.and_then(|g| g.rho)
    }

    /// Implied volatility.
    #[must_use]
    pub fn implied_volatility(&self) -> Option<rust_decimal::Decimal> {
        self.extended_properties.and_then(|e| e.implied_volatility)
    }

    /// Open interest.
    #[must_use]
    pub fn open_interest(&self) -> Option<u64> {
        self.extended_properties.and_then(|e| e.open_interest)
    }

    fn fees_for(&self, quantity: Quantity, incur_fees: bool) -> Result<Money, OptionPositionError> {
        if !incur_fees {
            return Ok(Money::ZERO);
        }
        self.settings
            .fee_per_contract
            .checked_mul(quantity.abs().amount())
            .ok_or_else(|| out_of_range("fee_per_contract"))
    }

    fn accrue(&self, fees: Money) -> Result<Money, OptionPositionError> {
        self.total_fees
            .checked_add(fees)
            .ok_or_else(|| out_of_range("fee_per_contract"))
    }

    fn require_quote(&self, operation: &str) -> Result<OptionQuote, OptionPositionError> {
        self.quote.ok_or_else(|| {
            OptionPositionError::invalid_state(operation, "the position has no quote")
        })
    }

    fn require_trade_open(&self, operation: &str) -> Result<TradeOpen, OptionPositionError> {
        self.trade_open.ok_or_else(|| {
            OptionPositionError::invalid_state(operation, "no trade has been opened")
        })
    }
}

impl fmt::Display for OptionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.contract)
    }
}

/// Price x 100 x quantity, or `None` past Decimal range.
fn contract_value(price: Money, quantity: Quantity) -> Option<Money> {
    CONTRACT_MULTIPLIER
        .checked_mul(quantity.amount())
        .and_then(|multiplied| price.checked_mul(multiplied))
}

fn out_of_range(field: &str) -> OptionPositionError {
    OptionPositionError::validation(field, "amount out of range")
}

fn ensure_not_past_expiration(
    contract: &OptionContract,
    quote: &OptionQuote,
) -> Result<(), OptionPositionError> {
    let quote_date = quote.quote_date().date();
    if quote_date > contract.expiration_date() {
        return Err(OptionPositionError::validation(
            "quote_date",
            format!(
                "quote date {quote_date} is past the expiration date {}",
                contract.expiration_date()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 7, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn contract() -> OptionContract {
        OptionContract::call("1", "XYZ", dec!(100), at(16, 0, 0)).unwrap()
    }

    fn quote(day: u32, price: Decimal) -> QuoteFields {
        QuoteFields::new(at(day, 9, 45), dec!(90), price - dec!(0.05), price + dec!(0.05), price)
    }

    fn position() -> OptionPosition {
        OptionPosition::new(contract(), quote(1, dec!(1.5)), None, None, PositionSettings::default()).unwrap()
    }

    #[test]
    fn new_without_quote() {
        let position =
            OptionPosition::new(contract(), QuoteFields::none(), None, None, PositionSettings::default())
                .unwrap();
        assert!(position.quote().is_none());
        assert!(position.quote_date().is_none());
        assert!(!position.is_open());
        assert!(position.side().is_none());
    }

    #[test]
    fn new_rejects_partial_quote() {
        let fields = QuoteFields {
            ask: None,
            ..quote(1, dec!(1.5))
        };
        let err = OptionPosition::new(contract(), fields, None, None, PositionSettings::default()).unwrap_err();
        assert_eq!(err, OptionPositionError::validation("ask", "ask is required"));
    }

    #[test]
    fn new_rejects_negative_fee_rate() {
        let settings = PositionSettings::with_fee(Money::new(dec!(-1)));
        let err = OptionPosition::new(contract(), QuoteFields::none(), None, None, settings).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn new_accepts_quote_on_expiration_day() {
        let fields = QuoteFields::new(at(16, 17, 0), dec!(90), dec!(0), dec!(0.05), dec!(0.02));
        assert!(OptionPosition::new(contract(), fields, None, None, PositionSettings::default()).is_ok());
    }

    #[test]
    fn new_keeps_supplied_analytics() {
        let greeks = Greeks::from_parts(None, Some(dec!(0.02)), None, None, None);
        let extended = ExtendedProperties::from_parts(None, Some(850));
        let position =
            OptionPosition::new(contract(), quote(1, dec!(1.5)), greeks, extended, PositionSettings::default())
                .unwrap();
        assert_eq!(position.gamma(), Some(dec!(0.02)));
        assert_eq!(position.delta(), None);
        assert_eq!(position.open_interest(), Some(850));
        assert_eq!(position.implied_volatility(), None);
    }

    #[test]
    fn new_stores_empty_analytics_as_absent() {
        let position = OptionPosition::new(
            contract(),
            quote(1, dec!(1.5)),
            Some(Greeks::default()),
            Some(ExtendedProperties::default()),
            PositionSettings::default(),
        )
        .unwrap();
        assert!(position.greeks().is_none());
        assert!(position.extended_properties().is_none());
    }

    #[test]
    fn new_rejects_quote_price_out_of_range() {
        let huge = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
        let fields = QuoteFields::new(at(1, 9, 45), dec!(90), dec!(1), dec!(2), huge);
        let err = OptionPosition::new(contract(), fields, None, None, PositionSettings::default())
            .unwrap_err();
        assert_eq!(
            err,
            OptionPositionError::validation(
                "price",
                format!("{huge} exceeds the limit of {}", OptionQuote::MAX_AMOUNT)
            )
        );
    }

    #[test]
    fn update_replaces_analytics_wholesale() {
        let mut position = position();
        let greeks = Greeks::from_parts(Some(dec!(0.3)), None, None, None, None);
        let extended = ExtendedProperties::from_parts(Some(dec!(0.25)), Some(1200));
        position.update(quote(2, dec!(1.6)), greeks, extended).unwrap();
        assert_eq!(position.delta(), Some(dec!(0.3)));
        assert_eq!(position.gamma(), None);
        assert_eq!(position.implied_volatility(), Some(dec!(0.25)));
        assert_eq!(position.open_interest(), Some(1200));

        position
            .update(quote(3, dec!(1.7)), Some(Greeks::default()), None)
            .unwrap();
        assert!(position.greeks().is_none());
        assert!(position.extended_properties().is_none());
        assert_eq!(position.price().unwrap().amount(), dec!(1.7));
    }

    #[test]
    fn update_rejects_out_of_order_quote() {
        let mut position = position();
        position.update(quote(5, dec!(1.6)), None, None).unwrap();
        let err = position.update(quote(4, dec!(1.7)), None, None).unwrap_err();
        assert!(matches!(err, OptionPositionError::Validation { ref field, .. } if field == "quote_date"));
        assert_eq!(position.price().unwrap().amount(), dec!(1.6));

        position.update(quote(5, dec!(1.8)), None, None).unwrap();
        assert_eq!(position.price().unwrap().amount(), dec!(1.8));
    }

    #[test]
    fn update_allows_out_of_order_when_not_enforced() {
        let settings = PositionSettings {
            enforce_quote_order: false,
            ..PositionSettings::default()
        };
        let mut position = OptionPosition::new(contract(), quote(5, dec!(1.5)), None, None, settings).unwrap();
        position.update(quote(4, dec!(1.7)), None, None).unwrap();
        assert_eq!(position.quote_date(), Some(at(4, 9, 45)));
    }

    #[test]
    fn update_requires_full_quote() {
        let mut position = position();
        let err = position
            .update(QuoteFields::none(), None, None)
            .unwrap_err();
        assert_eq!(err, OptionPositionError::validation("quote_date", "quote_date is required"));
    }

    #[test]
    fn open_trade_requires_quote() {
        let mut position =
            OptionPosition::new(contract(), QuoteFields::none(), None, None, PositionSettings::default())
                .unwrap();
        assert!(position.open_trade(10, true).unwrap_err().is_invalid_state());
    }

    #[test]
    fn open_trade_rejects_zero_and_fractional() {
        let mut position = position();
        assert!(position.open_trade(0, true).unwrap_err().is_validation());
        assert!(
            position
                .open_trade(Quantity::new(dec!(2.5)), true)
                .unwrap_err()
                .is_validation()
        );
        assert!(position.trade_open().is_none());
    }

    #[test]
    fn open_trade_short_premium_is_negative() {
        let mut position = position();
        let open = position.open_trade(-3, true).unwrap();
        assert_eq!(open.premium().amount(), dec!(-450));
        assert_eq!(position.side(), Some(PositionSide::Short));
        assert_eq!(position.quantity(), Quantity::from_i64(-3));
    }

    #[test]
    fn open_trade_twice_is_state_error() {
        let mut position = position();
        position.open_trade(1, true).unwrap();
        assert!(position.open_trade(1, true).unwrap_err().is_invalid_state());
    }

    #[test]
    fn reopen_after_full_close_is_state_error() {
        let mut position = position();
        position.open_trade(2, true).unwrap();
        position.close_trade(None, true).unwrap();
        assert!(!position.is_open());
        assert!(position.open_trade(2, true).unwrap_err().is_invalid_state());
    }

    #[test]
    fn close_trade_without_open_is_state_error() {
        let mut position = position();
        assert!(position.close_trade(None, true).unwrap_err().is_invalid_state());
    }

    #[test]
    fn close_trade_after_full_close_is_state_error() {
        let mut position = position();
        position.open_trade(2, true).unwrap();
        position.close_trade(None, true).unwrap();
        assert!(position.close_trade(None, true).unwrap_err().is_invalid_state());
    }

    #[test]
    fn close_trade_sign_must_match_side() {
        let mut position = position();
        position.open_trade(5, true).unwrap();
        let err = position
            .close_trade(Some(Quantity::from_i64(-2)), true)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(position.trade_closes().is_empty());
    }

    #[test]
    fn close_trade_short_records_positive_slice() {
        let mut position = position();
        position.open_trade(-4, true).unwrap();
        position.update(quote(2, dec!(1.0)), None, None).unwrap();
        let close = position
            .close_trade(Some(Quantity::from_i64(-1)), true)
            .unwrap();
        assert_eq!(close.quantity(), Quantity::from_i64(1));
        assert_eq!(close.price().amount(), dec!(1.0));
        assert_eq!(close.profit_loss().amount(), dec!(50));
        assert_eq!(close.profit_loss_percent().value(), dec!(0.3333));
        assert_eq!(position.quantity(), Quantity::from_i64(-3));
    }

    #[test]
    fn close_trade_long_percent_positive_on_gain() {
        let mut position = position();
        position.open_trade(1, true).unwrap();
        position.update(quote(2, dec!(10)), None, None).unwrap();
        let close = position.close_trade(None, true).unwrap();
        assert_eq!(close.profit_loss().amount(), dec!(850));
        assert_eq!(close.profit_loss_percent().value(), dec!(5.6667));
    }

    #[test]
    fn close_trade_at_zero_open_price() {
        let fields = QuoteFields::new(at(2, 9, 45), dec!(90), dec!(0.01), dec!(0.02), dec!(0));
        let mut zero =
            OptionPosition::new(contract(), fields, None, None, PositionSettings::default()).unwrap();
        zero.open_trade(1, false).unwrap();
        let close = zero.close_trade(None, false).unwrap();
        assert_eq!(close.profit_loss_percent(), Percent::ZERO);
    }

    #[test]
    fn set_fee_per_contract_applies_to_later_operations() {
        let mut position = position();
        position.open_trade(4, true).unwrap();
        assert!(position.total_fees().is_zero());

        position.set_fee_per_contract(Money::new(dec!(0.65))).unwrap();
        position.close_trade(Some(Quantity::from_i64(2)), true).unwrap();
        assert_eq!(position.total_fees().amount(), dec!(1.30));
        assert!(
            position
                .set_fee_per_contract(Money::new(dec!(-0.01)))
                .unwrap_err()
                .is_validation()
        );
        assert_eq!(position.fee_per_contract().amount(), dec!(0.65));
    }

    #[test]
    fn open_trade_rejects_quantity_out_of_range() {
        let mut position = position();
        let huge = Quantity::new(Decimal::from_i128_with_scale(10_i128.pow(27), 0));

        let err = position.open_trade(huge, true).unwrap_err();
        assert!(matches!(err, OptionPositionError::Validation { ref field, .. } if field == "quantity"));
        assert!(position.trade_open().is_none());
        assert!(position.quantity().is_zero());
    }

    #[test]
    fn open_trade_fee_overflow_leaves_position_untouched() {
        let fee = Money::new(Decimal::from_i128_with_scale(10_i128.pow(26), 0));
        let mut position =
            OptionPosition::new(contract(), quote(1, dec!(1.5)), None, None, PositionSettings::with_fee(fee))
                .unwrap();

        let err = position.open_trade(1000, true).unwrap_err();
        assert_eq!(err, OptionPositionError::validation("fee_per_contract", "amount out of range"));
        assert!(position.trade_open().is_none());
        assert!(position.side().is_none());
        assert!(position.total_fees().is_zero());
    }

    #[test]
    fn close_trade_fee_overflow_leaves_position_untouched() {
        let mut position = position();
        position.open_trade(1000, false).unwrap();
        position
            .set_fee_per_contract(Money::new(Decimal::from_i128_with_scale(10_i128.pow(26), 0)))
            .unwrap();

        let err = position.close_trade(None, true).unwrap_err();
        assert_eq!(err, OptionPositionError::validation("fee_per_contract", "amount out of range"));
        assert_eq!(position.quantity(), Quantity::from_i64(1000));
        assert!(position.trade_closes().is_empty());
        assert!(position.total_fees().is_zero());
    }

    #[test]
    fn annotations_are_stored_verbatim() {
        let mut position = position();
        position.annotations_mut().insert("leg", "long_call");
        assert_eq!(
            position.annotations().get("leg"),
            Some(&serde_json::json!("long_call"))
        );
    }

    #[test]
    fn serializes_for_reporting() {
        let mut position = position();
        position.open_trade(2, false).unwrap();
        let json = serde_json::to_value(&position).unwrap();
        assert_eq!(json["quantity"], serde_json::json!("2"));
        assert_eq!(json["side"], serde_json::json!("LONG"));
        assert!(json["trade_open"]["premium"].is_string());
    }

    #[test]
    fn display() {
        assert_eq!(position().to_string(), "<CALL XYZ 100 2021-07-16>");
    }
}
