//! Trade Open / Trade Close records
//!
//! Immutable records produced by the position aggregate. Only the aggregate
//! constructs them; callers read them through accessors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, Percent, Quantity};

/// The single opening fill of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOpen {
    date: NaiveDateTime,
    quantity: Quantity,
    price: Money,
    premium: Money,
    fees: Money,
}

impl TradeOpen {
    pub(crate) const fn new(
        date: NaiveDateTime,
        quantity: Quantity,
        price: Money,
        premium: Money,
        fees: Money,
    ) -> Self {
        Self {
            date,
            quantity,
            price,
            premium,
            fees,
        }
    }

    /// Quote timestamp at which the trade was opened.
    #[must_use]
    pub const fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Signed quantity opened; positive is long.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Per-share open price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Signed premium: price x 100 x quantity.
    #[must_use]
    pub const fn premium(&self) -> Money {
        self.premium
    }

    /// Fees charged at open.
    #[must_use]
    pub const fn fees(&self) -> Money {
        self.fees
    }
}

/// One closing slice, or the aggregate of every slice.
///
/// `quantity` carries the opposite sign of the open: closing 4 of a 10-lot
/// long records -4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeClose {
    date: NaiveDateTime,
    quantity: Quantity,
    price: Money,
    profit_loss: Money,
    profit_loss_percent: Percent,
    fees: Money,
}

impl TradeClose {
    pub(crate) const fn new(
        date: NaiveDateTime,
        quantity: Quantity,
        price: Money,
        profit_loss: Money,
        profit_loss_percent: Percent,
        fees: Money,
    ) -> Self {
        Self {
            date,
            quantity,
            price,
            profit_loss,
            profit_loss_percent,
            fees,
        }
    }

    /// Quote timestamp of the close.
    #[must_use]
    pub const fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Signed quantity removed from the open exposure.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Per-share close price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Realized profit or loss.
    #[must_use]
    pub const fn profit_loss(&self) -> Money {
        self.profit_loss
    }

    /// Realized return; a move in the holder's favor is positive.
    #[must_use]
    pub const fn profit_loss_percent(&self) -> Percent {
        self.profit_loss_percent
    }

    /// Fees charged at close.
    #[must_use]
    pub const fn fees(&self) -> Money {
        self.fees
    }
}
