//! Position lifecycle status.

use serde::{Deserialize, Serialize};

/// Where a position sits in its open/close lifecycle.
///
/// ```text
/// Untraded --open_trade--> Open --close_trade(partial)--> PartiallyClosed
///                           |                                  |
///                           +-------close_trade(rest)----------+--> Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    /// No trade has been opened.
    Untraded,
    /// Opened with no closes yet.
    Open,
    /// At least one close, exposure remaining.
    PartiallyClosed,
    /// Exposure returned to zero.
    Closed,
}

impl PositionStatus {
    /// Returns true while contracts are still held.
    #[must_use]
    pub const fn has_exposure(&self) -> bool {
        matches!(self, Self::Open | Self::PartiallyClosed)
    }
}

impl std::fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Untraded => write!(f, "UNTRADED"),
            Self::Open => write!(f, "OPEN"),
            Self::PartiallyClosed => write!(f, "PARTIALLY_CLOSED"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposure() {
        assert!(!PositionStatus::Untraded.has_exposure());
        assert!(PositionStatus::Open.has_exposure());
        assert!(PositionStatus::PartiallyClosed.has_exposure());
        assert!(!PositionStatus::Closed.has_exposure());
    }

    #[test]
    fn display_matches_serde() {
        let json = serde_json::to_string(&PositionStatus::PartiallyClosed).unwrap();
        assert_eq!(json, format!("\"{}\"", PositionStatus::PartiallyClosed));
    }
}
