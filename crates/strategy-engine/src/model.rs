//! Domain Models
//!
//! Protocols, requests and the strategies recommended for them.
//! Uses `rust_decimal` for all monetary values and rates - never use f64 for money!

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market::MarketMood;

/// Kind of yield a protocol produces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lending,
    Staking,
    Liquidity,
    Farming,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lending => "lending",
            Category::Staking => "staking",
            Category::Liquidity => "liquidity",
            Category::Farming => "farming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse riskiness of a protocol, ordered `Low < Moderate < High`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }

    /// Tier used to top up a candidate list that came up short
    pub fn backfill(&self) -> Self {
        match self {
            RiskTier::Low => RiskTier::Moderate,
            _ => RiskTier::High,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing risk appetite
///
/// Deserializing or parsing anything other than the three known levels
/// yields `Moderate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RiskLevel {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Conservative => "conservative",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Aggressive => "aggressive",
        }
    }

    /// Protocol tier this appetite maps onto
    pub fn tier(&self) -> RiskTier {
        match self {
            RiskLevel::Conservative => RiskTier::Low,
            RiskLevel::Moderate => RiskTier::Moderate,
            RiskLevel::Aggressive => RiskTier::High,
        }
    }
}

impl From<&str> for RiskLevel {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "conservative" => RiskLevel::Conservative,
            "aggressive" => RiskLevel::Aggressive,
            _ => RiskLevel::Moderate,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DeFi protocol from the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    /// Unique key (e.g., "scallop-lending")
    pub id: String,

    /// Display name (e.g., "Scallop Protocol")
    pub name: String,

    /// Display glyph
    pub logo: String,

    pub category: Category,

    pub risk_tier: RiskTier,

    /// Nominal annual percentage yield
    pub apy: Decimal,

    /// Total value locked in USD
    pub tvl: Decimal,

    /// Whether the contracts have been professionally audited
    pub audited: bool,

    pub description: String,

    /// Token deposited into the protocol
    #[serde(default = "default_token_symbol")]
    pub token_symbol: String,
}

fn default_token_symbol() -> String {
    "SUI".into()
}

/// Input to strategy generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyRequest {
    /// Principal to invest (validated positive by the caller)
    pub amount: Decimal,

    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl StrategyRequest {
    pub fn new(amount: Decimal, risk_level: RiskLevel) -> Self {
        Self { amount, risk_level }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityRisk {
    Low,
    Medium,
    High,
}

impl LiquidityRisk {
    /// Deeper pools are easier to exit
    pub fn from_tvl(tvl: Decimal) -> Self {
        if tvl > Decimal::from(10_000_000) {
            LiquidityRisk::Low
        } else if tvl > Decimal::from(5_000_000) {
            LiquidityRisk::Medium
        } else {
            LiquidityRisk::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityRisk::Low => "low",
            LiquidityRisk::Medium => "medium",
            LiquidityRisk::High => "high",
        }
    }
}

impl fmt::Display for LiquidityRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpermanentLossRisk {
    None,
    Low,
    Medium,
    High,
}

impl ImpermanentLossRisk {
    /// Only liquidity provision is exposed; any non-neutral market counts as volatile
    pub fn assess(category: Category, mood: MarketMood) -> Self {
        match (category, mood) {
            (Category::Liquidity, MarketMood::Neutral) => ImpermanentLossRisk::Medium,
            (Category::Liquidity, _) => ImpermanentLossRisk::High,
            _ => ImpermanentLossRisk::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpermanentLossRisk::None => "none",
            ImpermanentLossRisk::Low => "low",
            ImpermanentLossRisk::Medium => "medium",
            ImpermanentLossRisk::High => "high",
        }
    }
}

impl fmt::Display for ImpermanentLossRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recommended single-protocol strategy
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Strategy {
    /// Protocol this strategy deploys into (shared with the catalog)
    pub protocol: Arc<Protocol>,

    /// Share of principal deployed; always 100 since no splitting is done
    pub allocation_percentage: Decimal,

    /// Expected yearly return in deposited tokens
    pub estimated_return: Decimal,

    /// Nominal APY scaled by the market factor
    pub estimated_apy: Decimal,

    /// 1 (safest) to 10 (riskiest), one decimal place
    pub risk_score: Decimal,

    pub liquidity_risk: LiquidityRisk,

    pub impermanent_loss_risk: ImpermanentLossRisk,

    /// Market mood the numbers were computed under
    pub market_mood: MarketMood,

    /// Narrative rationale
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_risk_level_mapping() {
        assert_eq!(RiskLevel::Conservative.tier(), RiskTier::Low);
        assert_eq!(RiskLevel::Moderate.tier(), RiskTier::Moderate);
        assert_eq!(RiskLevel::Aggressive.tier(), RiskTier::High);
    }

    #[test]
    fn test_unknown_risk_level_falls_back_to_moderate() {
        assert_eq!(RiskLevel::from("YOLO"), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from(" Aggressive "), RiskLevel::Aggressive);
        assert_eq!(RiskLevel::from("CONSERVATIVE"), RiskLevel::Conservative);
        assert_eq!(RiskLevel::from(String::from("moderate")), RiskLevel::Moderate);

        let request: StrategyRequest =
            serde_json::from_str(r#"{"amount": "50", "risk_level": "degen"}"#).unwrap();
        assert_eq!(request.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_tier_ordering_and_backfill() {
        assert!(RiskTier::Low < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::High);
        assert_eq!(RiskTier::Low.backfill(), RiskTier::Moderate);
        assert_eq!(RiskTier::Moderate.backfill(), RiskTier::High);
        assert_eq!(RiskTier::High.backfill(), RiskTier::High);
    }

    #[test]
    fn test_liquidity_risk_thresholds() {
        assert_eq!(LiquidityRisk::from_tvl(dec!(10_000_001)), LiquidityRisk::Low);
        assert_eq!(LiquidityRisk::from_tvl(dec!(10_000_000)), LiquidityRisk::Medium);
        assert_eq!(LiquidityRisk::from_tvl(dec!(5_000_000)), LiquidityRisk::High);
    }

    #[test]
    fn test_impermanent_loss_only_for_liquidity() {
        assert_eq!(
            ImpermanentLossRisk::assess(Category::Farming, MarketMood::Bullish),
            ImpermanentLossRisk::None
        );
        assert_eq!(
            ImpermanentLossRisk::assess(Category::Liquidity, MarketMood::Neutral),
            ImpermanentLossRisk::Medium
        );
        assert_eq!(
            ImpermanentLossRisk::assess(Category::Liquidity, MarketMood::Bearish),
            ImpermanentLossRisk::High
        );
    }
}
