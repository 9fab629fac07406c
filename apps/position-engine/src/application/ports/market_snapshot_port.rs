//! Market Snapshot Port (Driven Port)
//!
//! Interface for the data loader that supplies, per timestamp, every live
//! contract with its quote and analytics.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::option_position::{ExtendedProperties, Greeks, OptionContract, OptionQuote};

/// One live contract as of a snapshot timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    /// Contract identity.
    pub contract: OptionContract,
    /// Quote at the snapshot timestamp.
    pub quote: OptionQuote,
    /// Greeks, when the source carries them.
    pub greeks: Option<Greeks>,
    /// Implied volatility / open interest, when the source carries them.
    pub extended_properties: Option<ExtendedProperties>,
}

impl SnapshotRow {
    /// Row with a quote and no analytics.
    #[must_use]
    pub const fn new(contract: OptionContract, quote: OptionQuote) -> Self {
        Self {
            contract,
            quote,
            greeks: None,
            extended_properties: None,
        }
    }

    /// Attach Greeks.
    #[must_use]
    pub const fn with_greeks(mut self, greeks: Greeks) -> Self {
        self.greeks = Some(greeks);
        self
    }

    /// Attach extended analytics.
    #[must_use]
    pub const fn with_extended_properties(mut self, extended: ExtendedProperties) -> Self {
        self.extended_properties = Some(extended);
        self
    }
}

/// Market data error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarketDataError {
    /// No snapshot exists for the timestamp.
    #[error("No market snapshot for {at}")]
    SnapshotUnavailable {
        /// Requested timestamp.
        at: NaiveDateTime,
    },

    /// The source failed to load.
    #[error("Market data source error: {message}")]
    SourceError {
        /// Error details.
        message: String,
    },
}

/// Port for loading chain snapshots.
pub trait MarketSnapshotPort: Send + Sync {
    /// Every live contract at `at`.
    fn snapshot(&self, at: NaiveDateTime) -> Result<Vec<SnapshotRow>, MarketDataError>;
}

/// In-memory snapshot source for tests and replayed backtests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketSnapshot {
    snapshots: BTreeMap<NaiveDateTime, Vec<SnapshotRow>>,
}

impl InMemoryMarketSnapshot {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the snapshot at `at`.
    pub fn insert(&mut self, at: NaiveDateTime, row: SnapshotRow) {
        self.snapshots.entry(at).or_default().push(row);
    }

    /// Builder-style [`InMemoryMarketSnapshot::insert`] for several rows.
    #[must_use]
    pub fn with_rows(mut self, at: NaiveDateTime, rows: impl IntoIterator<Item = SnapshotRow>) -> Self {
        self.snapshots.entry(at).or_default().extend(rows);
        self
    }

    /// Snapshot timestamps in ascending order.
    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.snapshots.keys().copied()
    }
}

impl MarketSnapshotPort for InMemoryMarketSnapshot {
    fn snapshot(&self, at: NaiveDateTime) -> Result<Vec<SnapshotRow>, MarketDataError> {
        self.snapshots
            .get(&at)
            .cloned()
            .ok_or(MarketDataError::SnapshotUnavailable { at })
    }
}
