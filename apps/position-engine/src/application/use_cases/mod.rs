//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod apply_market_snapshot;

pub use apply_market_snapshot::{
    ApplyMarketSnapshotUseCase, PositionUpdateFailure, SnapshotApplyReport,
};
