//! Application Layer
//!
//! Ports for the market data the engine consumes, the use case that feeds
//! snapshots into positions, and read-side chain views.

pub mod ports;
pub mod services;
pub mod use_cases;
