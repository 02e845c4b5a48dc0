//! # strategy-engine
//!
//! Yield strategy recommendations for DeFi protocols on the Sui blockchain.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌──────────┐   ┌─────────┐   ┌─────────────┐
//! │ risk filter  │──▶│  backfill   │──▶│  ranking │──▶│ scoring │──▶│ explanation │
//! │ (tier ≤ ask) │   │ (up to 3)   │   │ (by mood)│   │ (1..10) │   │  narrative  │
//! └──────────────┘   └─────────────┘   └──────────┘   └─────────┘   └─────────────┘
//!         ▲                                  ▲
//!   ProtocolCatalog                     MarketMood
//!   (immutable, Arc)             (bullish 1.2 / neutral 1.0 / bearish 0.8)
//! ```
//!
//! ## Example: 50 SUI, conservative, neutral market
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  🦪 Scallop Protocol   lending     8.30% APY   risk 2.5     │
//! │  🧭 NAVI Finance       staking     7.80% APY   risk 2.0     │
//! │  🌊 Cetus LP SUI-USDC  liquidity  14.20% APY   risk 6.5     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only two low-tier protocols exist in the reference catalog, so the third
//! slot is backfilled from the moderate tier.

pub mod analytics;
pub mod catalog;
pub mod error;
pub mod intent;
pub mod market;
pub mod model;
pub mod money;
pub mod portfolio;
pub mod strategy;
pub mod validation;

pub use analytics::{historical_yield, historical_yield_with_rng, security_score, YieldSample};
pub use catalog::ProtocolCatalog;
pub use error::{EngineError, Result};
pub use intent::{parse_intent, IntentError};
pub use market::{FixedMarketFeed, MarketFeed, MarketMood, RandomMarketFeed};
pub use model::{
    Category, ImpermanentLossRisk, LiquidityRisk, Protocol, RiskLevel, RiskTier, Strategy,
    StrategyRequest,
};
pub use money::round_half_up;
pub use portfolio::{ActiveStrategy, Portfolio, PositionStatus};
pub use strategy::{generate_strategies, StrategyEngine, MAX_STRATEGIES};
pub use validation::{validate_amount, AmountError, MAX_AMOUNT};
