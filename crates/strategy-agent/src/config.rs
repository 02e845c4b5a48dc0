//! Agent Configuration
//!
//! Read from the environment (after `.env` is loaded).

use std::path::PathBuf;
use std::time::Duration;

use strategy_engine::MarketMood;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// JSON catalog to load instead of the built-in Sui table
    pub catalog_path: Option<PathBuf>,

    /// Pause before answering, to mimic a remote call
    pub latency: Duration,

    /// Seed for reproducible moods, yield samples and simulated profits
    pub seed: Option<u64>,

    /// Pin the market mood instead of drawing it
    pub mood: Option<MarketMood>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            latency: Duration::from_millis(1500),
            seed: None,
            mood: None,
        }
    }
}

impl AgentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_path = lookup("STRATEGY_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let latency = match lookup("STRATEGY_LATENCY_MS") {
            Some(v) => Duration::from_millis(v.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "STRATEGY_LATENCY_MS",
                expected: "a number of milliseconds",
                value: v.clone(),
            })?),
            None => defaults.latency,
        };

        let seed = lookup("STRATEGY_SEED")
            .map(|v| {
                v.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "STRATEGY_SEED",
                    expected: "an unsigned integer",
                    value: v.clone(),
                })
            })
            .transpose()?;

        let mood = lookup("STRATEGY_MOOD")
            .map(|v| {
                v.parse::<MarketMood>().map_err(|_| ConfigError::Invalid {
                    var: "STRATEGY_MOOD",
                    expected: "bullish, neutral or bearish",
                    value: v.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            catalog_path,
            latency,
            seed,
            mood,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AgentConfig, ConfigError> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AgentConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]).unwrap();
        assert!(c.catalog_path.is_none());
        assert_eq!(c.latency, Duration::from_millis(1500));
        assert!(c.seed.is_none());
        assert!(c.mood.is_none());
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("STRATEGY_CATALOG_PATH", "protocols.json"),
            ("STRATEGY_LATENCY_MS", "0"),
            ("STRATEGY_SEED", "42"),
            ("STRATEGY_MOOD", "Bearish"),
        ])
        .unwrap();
        assert_eq!(c.catalog_path, Some(PathBuf::from("protocols.json")));
        assert_eq!(c.latency, Duration::ZERO);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.mood, Some(MarketMood::Bearish));
    }

    #[test]
    fn test_invalid_values() {
        assert!(config(&[("STRATEGY_LATENCY_MS", "soon")]).is_err());
        assert!(config(&[("STRATEGY_SEED", "-1")]).is_err());
        assert!(config(&[("STRATEGY_MOOD", "sideways")]).is_err());
    }
}
