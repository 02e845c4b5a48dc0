//! Security Score

use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::model::{Protocol, RiskTier};

/// 0-100 score; higher means safer
///
/// Audits are worth 30 points and each $1M of TVL adds one point, up to 20.
pub fn security_score(protocol: &Protocol) -> u8 {
    let mut score: i64 = 50;

    if protocol.audited {
        score += 30;
    }

    let tvl_points = (protocol.tvl / dec!(1_000_000))
        .floor()
        .to_i64()
        .unwrap_or(i64::MAX);
    score += tvl_points.clamp(0, 20);

    score += match protocol.risk_tier {
        RiskTier::Low => 10,
        RiskTier::Moderate => 0,
        RiskTier::High => -10,
    };

    u8::try_from(score.clamp(0, 100)).unwrap_or(100)
}
