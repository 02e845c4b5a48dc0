//! Synthetic Yield History
//!
//! Purely illustrative daily yields scattered around the nominal rate. Riskier
//! tiers scatter further. Nothing here is persisted or derived from chain data.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::{Protocol, RiskTier};

/// One day of simulated yield
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldSample {
    /// Days since the start of the series
    pub day: u32,

    /// Percentage yield earned that day
    pub yield_pct: Decimal,
}

/// Relative scatter around the daily base rate
pub fn volatility(tier: RiskTier) -> f64 {
    match tier {
        RiskTier::Low => 0.1,
        RiskTier::Moderate => 0.2,
        RiskTier::High => 0.4,
    }
}

/// `days` samples using the thread RNG
pub fn historical_yield(protocol: &Protocol, days: u32) -> Vec<YieldSample> {
    historical_yield_with_rng(protocol, days, &mut rand::thread_rng())
}

/// `days` samples of `apy / 365 * (1 + u * volatility)`, `u` uniform in [-1, 1]
pub fn historical_yield_with_rng<R: Rng + ?Sized>(
    protocol: &Protocol,
    days: u32,
    rng: &mut R,
) -> Vec<YieldSample> {
    let base = protocol.apy / dec!(365);
    let vol = volatility(protocol.risk_tier);

    (0..days)
        .map(|day| {
            let noise: f64 = rng.gen_range(-1.0..=1.0);
            let factor = Decimal::from_f64_retain(1.0 + noise * vol).unwrap_or(Decimal::ONE);
            YieldSample {
                day,
                yield_pct: base * factor,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProtocolCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_count_and_bounds() {
        let catalog = ProtocolCatalog::sui_defaults();
        let mut rng = StdRng::seed_from_u64(1);

        for protocol in catalog.iter() {
            let samples = historical_yield_with_rng(protocol, 30, &mut rng);
            assert_eq!(samples.len(), 30);

            let base = protocol.apy / dec!(365);
            let vol = Decimal::from_f64_retain(volatility(protocol.risk_tier)).unwrap();
            let lo = base * (Decimal::ONE - vol) - dec!(0.000001);
            let hi = base * (Decimal::ONE + vol) + dec!(0.000001);
            for (i, s) in samples.iter().enumerate() {
                assert_eq!(s.day as usize, i);
                assert!(s.yield_pct >= lo && s.yield_pct <= hi, "{} out of range", s.yield_pct);
            }
        }
    }

    #[test]
    fn test_zero_days() {
        let catalog = ProtocolCatalog::sui_defaults();
        assert!(historical_yield(catalog.get("navi-staking").unwrap(), 0).is_empty());
    }

    #[test]
    fn test_seeded_series_repeat() {
        let catalog = ProtocolCatalog::sui_defaults();
        let turbos = catalog.get("turbos-farming").unwrap();
        let a = historical_yield_with_rng(turbos, 7, &mut StdRng::seed_from_u64(5));
        let b = historical_yield_with_rng(turbos, 7, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
