//! Application Services
//!
//! Read-side views built from port data.

mod chain_snapshot;

pub use chain_snapshot::ChainSnapshot;
