//! Option Position Bounded Context
//!
//! This module handles the lifecycle of a single tradable option contract
//! inside a backtest:
//! - Contract identity and the current market quote
//! - Externally supplied Greeks and extended analytics
//! - Trade open / partial close bookkeeping with per-contract fees
//! - Realized and unrealized profit/loss
//!
//! The [`OptionPosition`] aggregate owns every record; the value objects
//! carry no behavior beyond construction and accessors.

pub mod aggregate;
pub mod errors;
pub mod value_objects;

pub use aggregate::{OptionPosition, PositionSettings};
pub use errors::OptionPositionError;
pub use value_objects::{
    Annotations, ExtendedProperties, Greeks, OptionContract, OptionContractBuilder, OptionQuote,
    OptionRight, PositionSide, PositionStatus, QuoteFields, TradeClose, TradeOpen,
};
