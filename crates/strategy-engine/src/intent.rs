//! Natural-Language Intent
//!
//! Pulls an amount and a risk appetite out of free text such as
//! "I want a low risk strategy for 50 SUI".

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::{RiskLevel, StrategyRequest};
use crate::validation::{validate_amount, AmountError};

static CONSERVATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)low risk|conservative|safe|minimal risk").expect("valid regex"));
static AGGRESSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)high risk|aggressive|risky|high yield").expect("valid regex"));
static MODERATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)moderate|balanced|medium risk").expect("valid regex"));
static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*sui").expect("valid regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("Couldn't detect an amount in SUI. Please specify an amount like '50 SUI'.")]
    MissingAmount,

    #[error("Please enter a valid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}

/// Risk appetite named in `text`, defaulting to moderate
///
/// Conservative phrases win over aggressive ones, which win over moderate.
pub fn detect_risk_level(text: &str) -> RiskLevel {
    if CONSERVATIVE.is_match(text) {
        RiskLevel::Conservative
    } else if AGGRESSIVE.is_match(text) {
        RiskLevel::Aggressive
    } else if MODERATE.is_match(text) {
        RiskLevel::Moderate
    } else {
        RiskLevel::default()
    }
}

/// Parse a request sentence into a validated [`StrategyRequest`]
pub fn parse_intent(text: &str) -> Result<StrategyRequest, IntentError> {
    let risk_level = detect_risk_level(text);

    let raw = AMOUNT
        .captures(text)
        .and_then(|c| c.get(1))
        .ok_or(IntentError::MissingAmount)?
        .as_str();

    let amount = validate_amount(raw)?;

    tracing::debug!(%amount, %risk_level, "parsed intent");
    Ok(StrategyRequest::new(amount, risk_level))
}
