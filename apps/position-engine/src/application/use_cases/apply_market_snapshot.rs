//! Apply Market Snapshot Use Case
//!
//! Loads the snapshot for a timestamp and feeds each matching position its
//! new quote and analytics.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::application::ports::{MarketDataError, MarketSnapshotPort, SnapshotRow};
use crate::domain::option_position::{OptionPosition, OptionPositionError};
use crate::domain::shared::ContractId;

/// A position whose update was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionUpdateFailure {
    /// Contract of the rejected position.
    pub contract_id: ContractId,
    /// Why the position rejected the update.
    pub error: OptionPositionError,
}

/// Outcome of applying one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotApplyReport {
    /// Snapshot timestamp.
    pub at: NaiveDateTime,
    /// Positions updated successfully.
    pub updated: usize,
    /// Positions whose contract was missing from the snapshot.
    pub unmatched: Vec<ContractId>,
    /// Positions that rejected their row.
    pub failures: Vec<PositionUpdateFailure>,
}

impl SnapshotApplyReport {
    /// Returns true if every position was updated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty() && self.failures.is_empty()
    }
}

/// Use case for pushing a market snapshot into a set of positions.
pub struct ApplyMarketSnapshotUseCase<P>
where
    P: MarketSnapshotPort,
{
    market_data: Arc<P>,
}

impl<P> ApplyMarketSnapshotUseCase<P>
where
    P: MarketSnapshotPort,
{
    /// Create a new use case.
    pub const fn new(market_data: Arc<P>) -> Self {
        Self { market_data }
    }

    /// Update every position whose contract appears in the snapshot at `at`.
    ///
    /// Per-position rejections are collected in the report; the remaining
    /// positions are still updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded.
    pub fn execute(
        &self,
        positions: &mut [OptionPosition],
        at: NaiveDateTime,
    ) -> Result<SnapshotApplyReport, MarketDataError> {
        let rows = self.market_data.snapshot(at)?;
        let by_contract: BTreeMap<&ContractId, &SnapshotRow> = rows
            .iter()
            .map(|row| (row.contract.contract_id(), row))
            .collect();

        let mut report = SnapshotApplyReport {
            at,
            updated: 0,
            unmatched: Vec::new(),
            failures: Vec::new(),
        };

        for position in positions.iter_mut() {
            let contract_id = position.contract().contract_id().clone();
            let Some(row) = by_contract.get(&contract_id) else {
                report.unmatched.push(contract_id);
                continue;
            };
            match position.update(row.quote.into(), row.greeks, row.extended_properties) {
                Ok(()) => report.updated += 1,
                Err(error) => {
                    warn!(contract_id = %contract_id, error = %error, "Snapshot row rejected");
                    report.failures.push(PositionUpdateFailure { contract_id, error });
                }
            }
        }

        info!(
            at = %at,
            rows = rows.len(),
            updated = report.updated,
            unmatched = report.unmatched.len(),
            failed = report.failures.len(),
            "Market snapshot applied"
        );

        Ok(report)
    }
}
