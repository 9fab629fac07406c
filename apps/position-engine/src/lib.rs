// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Position Engine - Rust Core Library
//!
//! Lifecycle and P&L accounting for a single option contract in an options
//! backtest.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `shared`: Fixed-point `Money` / `Quantity` / `Percent`, identifiers, symbols
//!   - `option_position`: Contract, quote, Greeks, trade records and the
//!     `OptionPosition` aggregate
//!
//! - **Application**: Orchestration around the domain
//!   - `ports`: `MarketSnapshotPort` for per-timestamp chain data
//!   - `use_cases`: `ApplyMarketSnapshot`
//!   - `services`: `ChainSnapshot` grouping by expiration and strike
//!
//! - **Config / Telemetry**: YAML configuration and `tracing` setup
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use position_engine::{OptionContract, OptionPosition, PositionSettings, QuoteFields};
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), position_engine::OptionPositionError> {
//! let expiration = NaiveDate::from_ymd_opt(2021, 7, 16)
//!     .and_then(|d| d.and_hms_opt(16, 0, 0))
//!     .unwrap_or_default();
//! let quote_date = NaiveDate::from_ymd_opt(2021, 7, 1)
//!     .and_then(|d| d.and_hms_opt(9, 45, 0))
//!     .unwrap_or_default();
//!
//! let contract = OptionContract::call("XYZ210716C100", "XYZ", dec!(100), expiration)?;
//! let quote = QuoteFields::new(quote_date, dec!(98), dec!(1.45), dec!(1.55), dec!(1.5));
//! let mut position = OptionPosition::new(contract, quote, None, None, PositionSettings::default())?;
//!
//! let open = position.open_trade(10, true)?;
//! assert_eq!(open.premium().amount(), dec!(1500));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

// =============================================================================
// Configuration and telemetry
// =============================================================================

pub mod config;
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::option_position::{
    Annotations, ExtendedProperties, Greeks, OptionContract, OptionContractBuilder,
    OptionPosition, OptionPositionError, OptionQuote, OptionRight, PositionSettings,
    PositionSide, PositionStatus, QuoteFields, TradeClose, TradeOpen,
};
pub use domain::shared::{ContractId, DomainError, Money, Percent, PositionId, Quantity, Symbol};

pub use application::ports::{
    InMemoryMarketSnapshot, MarketDataError, MarketSnapshotPort, SnapshotRow,
};
pub use application::services::ChainSnapshot;
pub use application::use_cases::{ApplyMarketSnapshotUseCase, SnapshotApplyReport};

pub use config::{Config, ConfigError, load_config, load_config_from_string};
