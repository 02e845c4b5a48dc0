//! Protocol Analytics
//!
//! Illustrative figures shown next to a protocol: a synthetic yield history
//! and a 0-100 security score.

mod security;
mod yield_history;

pub use security::security_score;
pub use yield_history::{historical_yield, historical_yield_with_rng, volatility, YieldSample};
