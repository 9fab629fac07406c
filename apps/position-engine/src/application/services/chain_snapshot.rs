//! Option chain view at a single timestamp.
//!
//! Groups snapshot rows by expiration and strike so selection logic can pick
//! a contract to open. Read-only; positions never consult it.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::application::ports::SnapshotRow;
use crate::domain::option_position::OptionRight;

#[derive(Debug, Clone, Default)]
struct StrikeRow {
    call: Option<SnapshotRow>,
    put: Option<SnapshotRow>,
}

/// Contracts of one chain grouped by expiration date and strike.
#[derive(Debug, Clone)]
pub struct ChainSnapshot {
    at: NaiveDateTime,
    chain: BTreeMap<NaiveDate, BTreeMap<Decimal, StrikeRow>>,
}

impl ChainSnapshot {
    /// Group rows; a later duplicate of the same contract replaces an earlier one.
    #[must_use]
    pub fn from_rows(at: NaiveDateTime, rows: impl IntoIterator<Item = SnapshotRow>) -> Self {
        let mut chain: BTreeMap<NaiveDate, BTreeMap<Decimal, StrikeRow>> = BTreeMap::new();
        for row in rows {
            let strike_row = chain
                .entry(row.contract.expiration_date())
                .or_default()
                .entry(row.contract.strike().normalize())
                .or_default();
            match row.contract.right() {
                OptionRight::Call => strike_row.call = Some(row),
                OptionRight::Put => strike_row.put = Some(row),
            }
        }
        Self { at, chain }
    }

    /// Snapshot timestamp.
    #[must_use]
    pub const fn at(&self) -> NaiveDateTime {
        self.at
    }

    /// Distinct expiration dates, ascending.
    #[must_use]
    pub fn expirations(&self) -> Vec<NaiveDate> {
        self.chain.keys().copied().collect()
    }

    /// Distinct strikes for an expiration, ascending. Empty if unknown.
    #[must_use]
    pub fn strikes(&self, expiration: NaiveDate) -> Vec<Decimal> {
        self.chain
            .get(&expiration)
            .map(|strikes| strikes.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Contract at an expiration, strike and right.
    #[must_use]
    pub fn get(&self, expiration: NaiveDate, strike: Decimal, right: OptionRight) -> Option<&SnapshotRow> {
        let strike_row = self.chain.get(&expiration)?.get(&strike.normalize())?;
        match right {
            OptionRight::Call => strike_row.call.as_ref(),
            OptionRight::Put => strike_row.put.as_ref(),
        }
    }

    /// Listed strike closest to `target`; ties go to the lower strike.
    #[must_use]
    pub fn nearest_strike(&self, expiration: NaiveDate, target: Decimal) -> Option<Decimal> {
        self.chain
            .get(&expiration)?
            .keys()
            .copied()
            .min_by_key(|strike| (*strike - target).abs())
    }

    /// Number of contracts in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain
            .values()
            .flat_map(BTreeMap::values)
            .map(|row| usize::from(row.call.is_some()) + usize::from(row.put.is_some()))
            .sum()
    }

    /// Returns true if the chain has no contracts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
