//! Suitability Ranking
//!
//! How candidates are ordered depends on the market mood and on the tier the
//! requester asked for.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::market::MarketMood;
use crate::model::{Protocol, RiskTier};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankingRule {
    /// Chase yield: highest APY first
    HighestApy,
    /// Capital safety: audited first, then deepest TVL
    AuditedThenTvl,
    /// Safest tier first, then highest APY within a tier
    TierThenApy,
}

impl RankingRule {
    pub fn select(mood: MarketMood, requested: RiskTier) -> Self {
        match mood {
            MarketMood::Bullish if requested != RiskTier::Low => RankingRule::HighestApy,
            MarketMood::Bearish => RankingRule::AuditedThenTvl,
            _ => RankingRule::TierThenApy,
        }
    }

    pub fn compare(&self, a: &Protocol, b: &Protocol) -> Ordering {
        match self {
            RankingRule::HighestApy => b.apy.cmp(&a.apy),
            RankingRule::AuditedThenTvl => b.audited.cmp(&a.audited).then_with(|| b.tvl.cmp(&a.tvl)),
            RankingRule::TierThenApy => a.risk_tier.cmp(&b.risk_tier).then_with(|| b.apy.cmp(&a.apy)),
        }
    }

    /// Stable sort, so equal candidates keep catalog order
    pub fn sort(&self, candidates: &mut [Arc<Protocol>]) {
        candidates.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProtocolCatalog;

    #[test]
    fn test_rule_selection() {
        assert_eq!(RankingRule::select(MarketMood::Bullish, RiskTier::High), RankingRule::HighestApy);
        assert_eq!(RankingRule::select(MarketMood::Bullish, RiskTier::Moderate), RankingRule::HighestApy);
        assert_eq!(RankingRule::select(MarketMood::Bullish, RiskTier::Low), RankingRule::TierThenApy);
        assert_eq!(RankingRule::select(MarketMood::Bearish, RiskTier::Low), RankingRule::AuditedThenTvl);
        assert_eq!(RankingRule::select(MarketMood::Neutral, RiskTier::High), RankingRule::TierThenApy);
    }

    #[test]
    fn test_stable_on_ties() {
        let catalog = ProtocolCatalog::sui_defaults();
        let mut all: Vec<_> = catalog.iter().cloned().collect();
        for p in &mut all {
            let mut flat = p.as_ref().clone();
            flat.apy = rust_decimal::Decimal::TEN;
            *p = Arc::new(flat);
        }

        RankingRule::HighestApy.sort(&mut all);
        let order: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
        let original: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, original);
    }
}
