//! Market Mood
//!
//! The market backdrop a set of recommendations is computed under, and the
//! feeds that supply it.

mod feed;

pub use feed::{FixedMarketFeed, RandomMarketFeed};

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Prevailing market sentiment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketMood {
    Bullish,
    Neutral,
    Bearish,
}

impl MarketMood {
    pub const ALL: [MarketMood; 3] = [MarketMood::Bullish, MarketMood::Neutral, MarketMood::Bearish];

    /// Multiplier applied to nominal APY
    pub fn factor(&self) -> Decimal {
        match self {
            MarketMood::Bullish => dec!(1.2),
            MarketMood::Neutral => dec!(1.0),
            MarketMood::Bearish => dec!(0.8),
        }
    }

    /// Uniform draw over the three moods
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketMood::Bullish => "bullish",
            MarketMood::Neutral => "neutral",
            MarketMood::Bearish => "bearish",
        }
    }
}

impl fmt::Display for MarketMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketMood {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bullish" | "bull" => Ok(MarketMood::Bullish),
            "neutral" => Ok(MarketMood::Neutral),
            "bearish" | "bear" => Ok(MarketMood::Bearish),
            other => Err(EngineError::UnknownMood(other.to_string())),
        }
    }
}

/// Source of market mood (Strategy pattern)
///
/// Implement this to wire recommendations to a real market-data feed.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Mood to use for the next batch of recommendations
    async fn current_mood(&self) -> Result<MarketMood>;

    /// Feed name
    fn name(&self) -> &str;
}
