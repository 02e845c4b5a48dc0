//! Market Feeds
//!
//! Mock feeds for demos and tests. No external market data is consulted.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use super::{MarketFeed, MarketMood};
use crate::error::Result;

/// Draws a uniformly random mood on every request
pub struct RandomMarketFeed {
    rng: Mutex<StdRng>,
}

impl Default for RandomMarketFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomMarketFeed {
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Reproducible sequence of moods (for testing and replayable demos)
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

#[async_trait]
impl MarketFeed for RandomMarketFeed {
    async fn current_mood(&self) -> Result<MarketMood> {
        let mut rng = self.rng.lock().await;
        let mood = MarketMood::draw(&mut *rng);
        tracing::debug!(%mood, "drew market mood");
        Ok(mood)
    }

    fn name(&self) -> &str {
        "RandomMarket"
    }
}

/// Always reports the same mood
pub struct FixedMarketFeed {
    mood: MarketMood,
}

impl FixedMarketFeed {
    pub fn new(mood: MarketMood) -> Self {
        Self { mood }
    }
}

#[async_trait]
impl MarketFeed for FixedMarketFeed {
    async fn current_mood(&self) -> Result<MarketMood> {
        Ok(self.mood)
    }

    fn name(&self) -> &str {
        "FixedMarket"
    }
}
