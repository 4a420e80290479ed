//! Market-context data surfaced next to the estimator.
//!
//! The engine never reads these itself — the benchmark rate enters through
//! `BondInputs::market_rate`. This module only models the collaborator that
//! supplies context rates, and the fallback values used when it cannot.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Percent;

/// 10-year treasury yield assumed when no live figure is available.
pub const DEFAULT_TREASURY_RATE: Decimal = dec!(4.0);

/// Corporate index spread assumed when no live figure is available.
pub const DEFAULT_CORPORATE_SPREAD: Decimal = dec!(2.5);

/// A snapshot of benchmark market rates, percentages to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketData {
    pub treasury_rate: Percent,
    pub corporate_spread: Percent,
    pub last_updated: DateTime<Utc>,
}

impl MarketData {
    pub fn new(treasury_rate: Percent, corporate_spread: Percent) -> Self {
        Self {
            treasury_rate: round_rate(treasury_rate),
            corporate_spread: round_rate(corporate_spread),
            last_updated: Utc::now(),
        }
    }

    /// The snapshot used when the rate source is unavailable.
    pub fn fallback() -> Self {
        Self::new(DEFAULT_TREASURY_RATE, DEFAULT_CORPORATE_SPREAD)
    }

    /// Benchmark a caller would feed into `BondInputs::market_rate`:
    /// treasury yield plus the corporate index spread.
    pub fn implied_market_rate(&self) -> Percent {
        self.treasury_rate + self.corporate_spread
    }
}

fn round_rate(rate: Percent) -> Percent {
    rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Seam for plugging in a live rate provider.
pub trait MarketDataSource {
    fn market_data(&self) -> MarketData;
}

/// Fixed snapshot source; also the stand-in when no provider is wired up.
#[derive(Debug, Clone)]
pub struct StaticMarketData(pub MarketData);

impl MarketDataSource for StaticMarketData {
    fn market_data(&self) -> MarketData {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_defaults() {
        let data = MarketData::fallback();
        assert_eq!(data.treasury_rate, dec!(4.00));
        assert_eq!(data.corporate_spread, dec!(2.50));
        assert_eq!(data.implied_market_rate(), dec!(6.50));
    }

    #[test]
    fn test_rates_rounded_to_basis_points() {
        let data = MarketData::new(dec!(4.267), dec!(2.455));
        assert_eq!(data.treasury_rate, dec!(4.27));
        assert_eq!(data.corporate_spread, dec!(2.46));
    }

    #[test]
    fn test_static_source_returns_snapshot() {
        let snapshot = MarketData::fallback();
        let source = StaticMarketData(snapshot.clone());
        assert_eq!(source.market_data(), snapshot);
    }
}
