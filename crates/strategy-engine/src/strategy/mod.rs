//! Strategy Generation
//!
//! Picks up to three protocols suited to a request and scores each one.

mod explanation;
mod ranking;
mod scoring;

pub use ranking::RankingRule;
pub use scoring::risk_score;

use std::sync::Arc;

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::ProtocolCatalog;
use crate::market::MarketMood;
use crate::model::{
    ImpermanentLossRisk, LiquidityRisk, Protocol, RiskLevel, Strategy, StrategyRequest,
};

/// Number of strategies returned per request
pub const MAX_STRATEGIES: usize = 3;

/// Recommendation engine bound to a catalog
#[derive(Clone, Debug)]
pub struct StrategyEngine {
    catalog: Arc<ProtocolCatalog>,
}

impl StrategyEngine {
    pub fn new(catalog: Arc<ProtocolCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProtocolCatalog {
        &self.catalog
    }

    /// Generate strategies under a mood drawn from the thread RNG
    pub fn generate(&self, request: &StrategyRequest) -> Vec<Strategy> {
        self.generate_with_rng(request, &mut rand::thread_rng())
    }

    /// Generate strategies, drawing the mood once from `rng`
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &StrategyRequest,
        rng: &mut R,
    ) -> Vec<Strategy> {
        let mood = MarketMood::draw(rng);
        self.generate_for_mood(request, mood)
    }

    /// Generate strategies under a known mood (pure)
    pub fn generate_for_mood(&self, request: &StrategyRequest, mood: MarketMood) -> Vec<Strategy> {
        generate_strategies(&self.catalog, request, mood)
    }
}

/// Rank and score the protocols suited to `request`
///
/// Returns at most [`MAX_STRATEGIES`] strategies, all computed under `mood`.
/// Fewer are returned only when the catalog cannot supply enough candidates.
pub fn generate_strategies(
    catalog: &ProtocolCatalog,
    request: &StrategyRequest,
    mood: MarketMood,
) -> Vec<Strategy> {
    let tier = request.risk_level.tier();

    let mut candidates: Vec<Arc<Protocol>> = catalog
        .iter()
        .filter(|p| p.risk_tier <= tier)
        .cloned()
        .collect();

    if candidates.len() < MAX_STRATEGIES {
        let backfill_tier = tier.backfill();
        let backfill: Vec<Arc<Protocol>> = catalog
            .iter()
            .filter(|p| p.risk_tier == backfill_tier)
            .filter(|p| !candidates.iter().any(|c| c.id == p.id))
            .cloned()
            .collect();

        tracing::debug!(
            eligible = candidates.len(),
            backfill = backfill.len(),
            %backfill_tier,
            "backfilling candidates"
        );

        candidates.extend(backfill);
        candidates.truncate(MAX_STRATEGIES);
    }

    let rule = RankingRule::select(mood, tier);
    rule.sort(&mut candidates);
    candidates.truncate(MAX_STRATEGIES);

    tracing::debug!(
        amount = %request.amount,
        risk_level = %request.risk_level,
        %mood,
        ?rule,
        picks = ?candidates.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        "generated strategies"
    );

    candidates
        .into_iter()
        .map(|protocol| build_strategy(protocol, request, mood))
        .collect()
}

fn build_strategy(protocol: Arc<Protocol>, request: &StrategyRequest, mood: MarketMood) -> Strategy {
    // Figures past the Decimal range saturate at Decimal::MAX
    let estimated_apy = protocol
        .apy
        .checked_mul(mood.factor())
        .unwrap_or(Decimal::MAX);
    let estimated_return = request
        .amount
        .checked_mul(estimated_apy)
        .map_or(Decimal::MAX, |v| v / dec!(100));

    let explanation = explanation::compose(&protocol, request.amount, estimated_apy, estimated_return, mood);

    Strategy {
        allocation_percentage: Decimal::ONE_HUNDRED,
        estimated_return,
        estimated_apy,
        risk_score: risk_score(&protocol, request.risk_level),
        liquidity_risk: LiquidityRisk::from_tvl(protocol.tvl),
        impermanent_loss_risk: ImpermanentLossRisk::assess(protocol.category, mood),
        market_mood: mood,
        explanation,
        protocol,
    }
}

impl Strategy {
    /// Whether this strategy fits the appetite it was requested with
    pub fn fits(&self, risk_level: RiskLevel) -> bool {
        self.protocol.risk_tier <= risk_level.tier()
    }
}
