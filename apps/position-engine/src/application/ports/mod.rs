//! Application Ports
//!
//! Interfaces for the systems the engine is driven by.

mod market_snapshot_port;

pub use market_snapshot_port::{
    InMemoryMarketSnapshot, MarketDataError, MarketSnapshotPort, SnapshotRow,
};
