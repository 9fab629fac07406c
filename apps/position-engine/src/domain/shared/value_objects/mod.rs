//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.
//!
//! # Numeric policy
//!
//! All currency and quantity arithmetic is fixed-point decimal:
//!
//! | Type | Field class | Scale |
//! |------|-------------|-------|
//! | [`Quantity`] | contracts | 0 |
//! | [`Money`] | prices, premiums, fees, P&L | 2 |
//! | [`Percent`] | returns | 4 |
//!
//! Rounding is banker's rounding (midpoint to even), the default of
//! [`rust_decimal::Decimal::round_dp`].

mod identifiers;
mod money;
mod percent;
mod quantity;
mod symbol;

pub use identifiers::{ContractId, PositionId};
pub use money::Money;
pub use percent::Percent;
pub use quantity::Quantity;
pub use symbol::Symbol;
