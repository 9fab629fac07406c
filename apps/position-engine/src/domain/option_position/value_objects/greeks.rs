//! Option Greeks and extended analytics snapshots.
//!
//! Both are supplied by the data source and never computed here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Greeks snapshot as of the current quote.
///
/// Individual members may be absent; the snapshot itself only exists when at
/// least one member was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta - price sensitivity to the underlying.
    pub delta: Option<Decimal>,
    /// Gamma - rate of change of delta.
    pub gamma: Option<Decimal>,
    /// Theta - time decay per day.
    pub theta: Option<Decimal>,
    /// Vega - sensitivity to volatility.
    pub vega: Option<Decimal>,
    /// Rho - sensitivity to interest rates.
    pub rho: Option<Decimal>,
}

impl Greeks {
    /// Create a fully populated snapshot.
    #[must_use]
    pub const fn new(
        delta: Decimal,
        gamma: Decimal,
        theta: Decimal,
        vega: Decimal,
        rho: Decimal,
    ) -> Self {
        Self {
            delta: Some(delta),
            gamma: Some(gamma),
            theta: Some(theta),
            vega: Some(vega),
            rho: Some(rho),
        }
    }

    /// Snapshot from optional members; `None` when every member is absent.
    #[must_use]
    pub fn from_parts(
        delta: Option<Decimal>,
        gamma: Option<Decimal>,
        theta: Option<Decimal>,
        vega: Option<Decimal>,
        rho: Option<Decimal>,
    ) -> Option<Self> {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
        .non_empty()
    }

    /// Returns true if no member is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.delta.is_none()
            && self.gamma.is_none()
            && self.theta.is_none()
            && self.vega.is_none()
            && self.rho.is_none()
    }

    /// `Some(self)` unless every member is absent.
    #[must_use]
    pub const fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

/// Extended analytics snapshot as of the current quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtendedProperties {
    /// Implied volatility as a fraction.
    pub implied_volatility: Option<Decimal>,
    /// Open interest in contracts.
    pub open_interest: Option<u64>,
}

impl ExtendedProperties {
    /// Create a fully populated snapshot.
    #[must_use]
    pub const fn new(implied_volatility: Decimal, open_interest: u64) -> Self {
        Self {
            implied_volatility: Some(implied_volatility),
            open_interest: Some(open_interest),
        }
    }

    /// Snapshot from optional members; `None` when both are absent.
    #[must_use]
    pub const fn from_parts(
        implied_volatility: Option<Decimal>,
        open_interest: Option<u64>,
    ) -> Option<Self> {
        Self {
            implied_volatility,
            open_interest,
        }
        .non_empty()
    }

    /// Returns true if no member is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.implied_volatility.is_none() && self.open_interest.is_none()
    }

    /// `Some(self)` unless every member is absent.
    #[must_use]
    pub const fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn greeks_new_populates_every_member() {
        let g = Greeks::new(dec!(0.3459), dec!(-0.1234), dec!(0.0485), dec!(0.0935), dec!(0.132));
        assert_eq!(g.delta, Some(dec!(0.3459)));
        assert_eq!(g.rho, Some(dec!(0.132)));
        assert!(!g.is_empty());
    }

    #[test]
    fn greeks_from_parts_absent_when_empty() {
        assert!(Greeks::from_parts(None, None, None, None, None).is_none());
        assert!(Greeks::default().non_empty().is_none());
    }

    #[test]
    fn greeks_from_parts_keeps_partial_members() {
        let g = Greeks::from_parts(Some(dec!(0.5)), None, None, None, None).unwrap();
        assert_eq!(g.delta, Some(dec!(0.5)));
        assert_eq!(g.gamma, None);
    }

    #[test]
    fn extended_properties_from_parts() {
        assert!(ExtendedProperties::from_parts(None, None).is_none());

        let ext = ExtendedProperties::from_parts(None, Some(100)).unwrap();
        assert_eq!(ext.open_interest, Some(100));
        assert_eq!(ext.implied_volatility, None);

        let full = ExtendedProperties::new(dec!(0.3301), 100);
        assert!(!full.is_empty());
    }

    #[test]
    fn greeks_serde_roundtrip() {
        let g = Greeks::from_parts(Some(dec!(0.25)), Some(dec!(0.01)), None, None, None).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let parsed: Greeks = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, g);
    }
}
