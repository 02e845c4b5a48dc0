//! Error Types for the Strategy Engine
//!
//! Strategy generation itself is infallible. These errors come from loading
//! catalogs and from the lookups callers make around the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Unknown protocol: {0}")]
    UnknownProtocol(String),

    #[error("Unknown market mood: {0} (expected bullish, neutral or bearish)")]
    UnknownMood(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
