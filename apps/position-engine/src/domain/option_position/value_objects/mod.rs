//! Option Position Value Objects

mod annotations;
mod greeks;
mod option_contract;
mod option_quote;
mod position_side;
mod position_status;
mod trade_records;

pub use annotations::Annotations;
pub use greeks::{ExtendedProperties, Greeks};
pub use option_contract::{CONTRACT_MULTIPLIER, OptionContract, OptionContractBuilder, OptionRight};
pub use option_quote::{OptionQuote, QuoteFields};
pub use position_side::PositionSide;
pub use position_status::PositionStatus;
pub use trade_records::{TradeClose, TradeOpen};
