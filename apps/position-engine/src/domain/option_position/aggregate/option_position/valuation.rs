//! Read-side queries: closing price, moneyness, P&L and day counts.

use rust_decimal::Decimal;

use super::OptionPosition;
use crate::domain::option_position::errors::OptionPositionError;
use crate::domain::option_position::value_objects::{
    CONTRACT_MULTIPLIER, PositionSide, PositionStatus, TradeClose,
};
use crate::domain::shared::{Money, Percent, Quantity};

impl OptionPosition {
    /// Price at which a close would execute right now.
    ///
    /// In priority order:
    /// 1. Expired: zero when out of the money, intrinsic value otherwise.
    /// 2. Zero bid: nothing to sell into, so a long is worth zero while a
    ///    short is bought back at the ask.
    /// 3. The quoted mid / settlement price.
    ///
    /// # Errors
    ///
    /// Returns a state error if no trade has been opened.
    pub fn closing_price(&self) -> Result<Money, OptionPositionError> {
        const OPERATION: &str = "determine closing price";

        self.require_trade_open(OPERATION)?;
        let quote = self.require_quote(OPERATION)?;

        if self.is_expired() == Some(true) {
            let spot = quote.spot_price();
            if self.contract.is_otm_at(spot) {
                return Ok(Money::ZERO);
            }
            return Ok(Money::new(self.contract.intrinsic_value(spot)));
        }

        if quote.bid().is_zero() {
            return Ok(match self.side {
                Some(PositionSide::Short) => quote.ask(),
                _ => Money::ZERO,
            });
        }

        Ok(quote.price())
    }

    /// In the money at the current spot; `None` without a quote.
    #[must_use]
    pub fn is_itm(&self) -> Option<bool> {
        self.quote
            .map(|q| self.contract.is_itm_at(q.spot_price()))
    }

    /// Out of the money at the current spot; `None` without a quote.
    #[must_use]
    pub fn is_otm(&self) -> Option<bool> {
        self.quote
            .map(|q| self.contract.is_otm_at(q.spot_price()))
    }

    /// Whether the quote is at or past the PM-settlement cutoff.
    ///
    /// `None` without a quote.
    #[must_use]
    pub fn is_expired(&self) -> Option<bool> {
        let expiration_date = self.contract.expiration_date();
        self.quote.map(|q| {
            let quote_date = q.quote_date();
            quote_date.date() > expiration_date
                || (quote_date.date() == expiration_date
                    && quote_date.time() >= self.settings.expiration_cutoff)
        })
    }

    /// True while contracts remain open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.quantity.is_zero()
    }

    /// Lifecycle status derived from the trade records.
    #[must_use]
    pub fn status(&self) -> PositionStatus {
        match (self.trade_open.is_some(), self.trade_closes.is_empty()) {
            (false, _) => PositionStatus::Untraded,
            (true, _) if !self.is_open() => PositionStatus::Closed,
            (true, true) => PositionStatus::Open,
            (true, false) => PositionStatus::PartiallyClosed,
        }
    }

    /// Every closing slice folded into one record.
    ///
    /// The date is the latest close, the price is quantity-weighted and the
    /// percent is realized P&L over the opening premium, positive when the
    /// holder gained. `None` until the first close.
    #[must_use]
    pub fn trade_close_summary(&self) -> Option<TradeClose> {
        let trade_open = self.trade_open?;
        let date = self.trade_closes.iter().map(TradeClose::date).max()?;

        let quantity: Quantity = self.trade_closes.iter().map(TradeClose::quantity).sum();
        let weighted: Decimal = self
            .trade_closes
            .iter()
            .map(|c| c.price().amount() * c.quantity().amount())
            .sum();
        let price = if quantity.is_zero() {
            Money::ZERO
        } else {
            Money::new(weighted / quantity.amount())
        };
        let profit_loss: Money = self.trade_closes.iter().map(TradeClose::profit_loss).sum();
        let profit_loss_percent =
            Percent::ratio(profit_loss.amount(), trade_open.premium().amount())
                .scaled(-quantity.signum());
        let fees: Money = self.trade_closes.iter().map(TradeClose::fees).sum();

        Some(TradeClose::new(
            date,
            quantity,
            price,
            profit_loss,
            profit_loss_percent,
            fees,
        ))
    }

    /// Sum of realized P&L across every close.
    #[must_use]
    pub fn realized_profit_loss(&self) -> Money {
        self.trade_closes.iter().map(TradeClose::profit_loss).sum()
    }

    /// Mark-to-market P&L of the contracts still open, at the quoted price.
    ///
    /// # Errors
    ///
    /// Returns a state error if no trade has been opened.
    pub fn unrealized_profit_loss(&self) -> Result<Money, OptionPositionError> {
        const OPERATION: &str = "compute unrealized profit/loss";

        let trade_open = self.require_trade_open(OPERATION)?;
        let quote = self.require_quote(OPERATION)?;
        Ok((quote.price() - trade_open.price()) * (CONTRACT_MULTIPLIER * self.quantity.amount()))
    }

    /// Unrealized plus realized P&L.
    ///
    /// # Errors
    ///
    /// Returns a state error if no trade has been opened.
    pub fn total_profit_loss(&self) -> Result<Money, OptionPositionError> {
        Ok(self.unrealized_profit_loss()? + self.realized_profit_loss())
    }

    /// Return on the open contracts at the quoted price; zero once flat.
    ///
    /// # Errors
    ///
    /// Returns a state error if no trade has been opened.
    pub fn unrealized_profit_loss_percent(&self) -> Result<Percent, OptionPositionError> {
        const OPERATION: &str = "compute unrealized profit/loss percent";

        let trade_open = self.require_trade_open(OPERATION)?;
        if self.quantity.is_zero() {
            return Ok(Percent::ZERO);
        }
        let quote = self.require_quote(OPERATION)?;
        let open_price = trade_open.price();
        Ok(
            Percent::ratio((quote.price() - open_price).amount(), open_price.amount())
                .scaled(self.quantity.signum()),
        )
    }

    /// Return of the whole trade against the opening premium.
    ///
    /// Open contracts are valued at the quoted price and closed ones at their
    /// close price. Positive when the holder gained.
    ///
    /// # Errors
    ///
    /// Returns a state error if no trade has been opened.
    pub fn total_profit_loss_percent(&self) -> Result<Percent, OptionPositionError> {
        const OPERATION: &str = "compute total profit/loss percent";

        let trade_open = self.require_trade_open(OPERATION)?;
        let quote = self.require_quote(OPERATION)?;

        let open_value = quote.price().amount() * CONTRACT_MULTIPLIER * self.quantity.amount();
        let closed_value: Decimal = self
            .trade_closes
            .iter()
            .map(|c| c.price().amount() * CONTRACT_MULTIPLIER * -c.quantity().amount())
            .sum();
        let premium = trade_open.premium().amount();
        let percent = Percent::ratio(open_value + closed_value - premium, premium);

        Ok(match self.side {
            Some(PositionSide::Short) => -percent,
            _ => percent,
        })
    }

    /// Current price x 100 x net-open quantity; `None` without a quote.
    #[must_use]
    pub fn market_value(&self) -> Option<Money> {
        self.quote
            .map(|q| q.price() * (CONTRACT_MULTIPLIER * self.quantity.amount()))
    }

    /// Whole days from the quote date to the expiration date.
    #[must_use]
    pub fn days_to_expiration(&self) -> Option<i64> {
        self.quote.map(|q| {
            (self.contract.expiration_date() - q.quote_date().date()).num_days()
        })
    }

    /// Whole days the trade has been held.
    ///
    /// Runs to the latest close once fully closed, otherwise to the current
    /// quote date.
    ///
    /// # Errors
    ///
    /// Returns a state error if no trade has been opened.
    pub fn days_in_trade(&self) -> Result<i64, OptionPositionError> {
        const OPERATION: &str = "compute days in trade";

        let trade_open = self.require_trade_open(OPERATION)?;
        let until = match self.trade_closes.iter().map(TradeClose::date).max() {
            Some(last_close) if !self.is_open() => last_close,
            _ => self.require_quote(OPERATION)?.quote_date(),
        };
        Ok((until.date() - trade_open.date().date()).num_days())
    }
}
