//! Application State

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use strategy_engine::{
    FixedMarketFeed, MarketFeed, ProtocolCatalog, RandomMarketFeed, StrategyEngine,
};

use crate::config::AgentConfig;

/// Everything a command needs
pub struct AppState {
    /// Engine bound to the loaded catalog
    pub engine: StrategyEngine,

    /// Market mood source (random unless pinned)
    pub feed: Arc<dyn MarketFeed>,

    /// RNG for yield samples and simulated profits
    pub rng: StdRng,

    pub config: AgentConfig,
}

impl AppState {
    pub fn from_config(config: AgentConfig) -> strategy_engine::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => ProtocolCatalog::load(path)?,
            None => ProtocolCatalog::sui_defaults(),
        };

        let feed: Arc<dyn MarketFeed> = match (config.mood, config.seed) {
            (Some(mood), _) => Arc::new(FixedMarketFeed::new(mood)),
            (None, Some(seed)) => Arc::new(RandomMarketFeed::seeded(seed)),
            (None, None) => Arc::new(RandomMarketFeed::new()),
        };

        // Offset so profits and moods don't replay the same stream
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        tracing::info!(
            protocols = catalog.len(),
            feed = feed.name(),
            "strategy agent ready"
        );

        Ok(Self {
            engine: StrategyEngine::new(Arc::new(catalog)),
            feed,
            rng,
            config,
        })
    }
}
