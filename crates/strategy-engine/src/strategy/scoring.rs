//! Risk Scoring

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{Category, Protocol, RiskLevel, RiskTier};

const MIN_SCORE: Decimal = dec!(1);
const MAX_SCORE: Decimal = dec!(10);

/// Risk score from 1 (safest) to 10, rounded to one decimal place
///
/// Starts from the protocol tier, adjusts for audit status, TVL depth and
/// category, then nudges by the requester's own appetite.
pub fn risk_score(protocol: &Protocol, appetite: RiskLevel) -> Decimal {
    let mut score = match protocol.risk_tier {
        RiskTier::Low => dec!(2),
        RiskTier::Moderate => dec!(5),
        RiskTier::High => dec!(8),
    };

    if !protocol.audited {
        score += dec!(1.5);
    }

    if protocol.tvl < dec!(5_000_000) {
        score += dec!(1);
    } else if protocol.tvl > dec!(15_000_000) {
        score -= dec!(0.5);
    }

    score += match protocol.category {
        Category::Liquidity => dec!(1),
        Category::Farming => dec!(2),
        Category::Staking => dec!(-0.5),
        Category::Lending => Decimal::ZERO,
    };

    score += match appetite {
        RiskLevel::Conservative => dec!(0.5),
        RiskLevel::Moderate => Decimal::ZERO,
        RiskLevel::Aggressive => dec!(-1),
    };

    score.round_dp(1).clamp(MIN_SCORE, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProtocolCatalog;

    fn score(id: &str, appetite: RiskLevel) -> Decimal {
        let catalog = ProtocolCatalog::sui_defaults();
        risk_score(catalog.get(id).unwrap(), appetite)
    }

    #[test]
    fn test_reference_scores() {
        assert_eq!(score("scallop-lending", RiskLevel::Moderate), dec!(2));
        assert_eq!(score("navi-staking", RiskLevel::Conservative), dec!(2));
        assert_eq!(score("flowx-lending", RiskLevel::Aggressive), dec!(4));
        // 8 + 1.5 unaudited + 1 thin TVL + 2 farming
        assert_eq!(score("turbos-farming", RiskLevel::Moderate), dec!(10));
        assert_eq!(score("turbos-farming", RiskLevel::Aggressive), dec!(10));
    }

    #[test]
    fn test_clamped_to_range() {
        let catalog = ProtocolCatalog::sui_defaults();
        let mut safest = catalog.get("navi-staking").unwrap().as_ref().clone();
        safest.tvl = dec!(900_000_000);
        // 2 - 0.5 - 0.5 - 1 = 0 before clamping
        assert_eq!(risk_score(&safest, RiskLevel::Aggressive), MIN_SCORE);

        let mut riskiest = catalog.get("turbos-farming").unwrap().as_ref().clone();
        riskiest.tvl = dec!(10);
        assert_eq!(risk_score(&riskiest, RiskLevel::Conservative), MAX_SCORE);
    }
}
