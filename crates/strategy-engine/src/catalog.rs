//! Protocol Catalog
//!
//! Immutable list of protocols recommendations are drawn from. Loaded once and
//! shared by reference (`Arc`) across every request.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{EngineError, Result};
use crate::model::{Category, Protocol, RiskTier};

#[derive(Clone, Debug, Default)]
pub struct ProtocolCatalog {
    protocols: Vec<Arc<Protocol>>,
}

impl ProtocolCatalog {
    /// Build a catalog, rejecting duplicate ids and negative figures
    pub fn new(protocols: Vec<Protocol>) -> Result<Self> {
        let mut seen = HashSet::new();
        for p in &protocols {
            if !seen.insert(p.id.as_str()) {
                return Err(EngineError::Catalog(format!("duplicate protocol id '{}'", p.id)));
            }
            if p.apy < Decimal::ZERO {
                return Err(EngineError::Catalog(format!("{} has negative APY", p.id)));
            }
            if p.tvl < Decimal::ZERO {
                return Err(EngineError::Catalog(format!("{} has negative TVL", p.id)));
            }
        }

        Ok(Self {
            protocols: protocols.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a JSON array of protocols
    pub fn from_json(json: &str) -> Result<Self> {
        let protocols: Vec<Protocol> = serde_json::from_str(json)?;
        Self::new(protocols)
    }

    /// Load a JSON catalog from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), protocols = catalog.len(), "loaded protocol catalog");
        Ok(catalog)
    }

    /// The reference Sui protocol table
    pub fn sui_defaults() -> Self {
        let protocols = DEFAULT_PROTOCOLS
            .iter()
            .map(|&(id, name, logo, category, risk_tier, apy, tvl, audited, description, token)| {
                Arc::new(Protocol {
                    id: id.into(),
                    name: name.into(),
                    logo: logo.into(),
                    category,
                    risk_tier,
                    apy,
                    tvl,
                    audited,
                    description: description.into(),
                    token_symbol: token.into(),
                })
            })
            .collect();

        Self { protocols }
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Protocol>> {
        self.protocols.iter().find(|p| p.id == id)
    }

    /// Like `get`, but an unknown id is an error
    pub fn require(&self, id: &str) -> Result<&Arc<Protocol>> {
        self.get(id).ok_or_else(|| EngineError::UnknownProtocol(id.to_string()))
    }

    /// Protocols in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Protocol>> {
        self.protocols.iter()
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}

// (id, name, logo, category, tier, apy, tvl, audited, description, token)
type ProtocolRow = (
    &'static str,
    &'static str,
    &'static str,
    Category,
    RiskTier,
    Decimal,
    Decimal,
    bool,
    &'static str,
    &'static str,
);

const DEFAULT_PROTOCOLS: [ProtocolRow; 6] = [
    (
        "scallop-lending",
        "Scallop Protocol",
        "🦪",
        Category::Lending,
        RiskTier::Low,
        dec!(8.3),
        dec!(15_000_000),
        true,
        "Sui's native money market protocol. Lend and borrow assets securely.",
        "SUI",
    ),
    (
        "navi-staking",
        "NAVI Finance",
        "🧭",
        Category::Staking,
        RiskTier::Low,
        dec!(7.8),
        dec!(12_000_000),
        true,
        "Safe staking solution for SUI tokens with consistent rewards.",
        "SUI",
    ),
    (
        "cetus-sui-usdc",
        "Cetus LP SUI-USDC",
        "🌊",
        Category::Liquidity,
        RiskTier::Moderate,
        dec!(14.2),
        dec!(8_500_000),
        true,
        "Provide liquidity for SUI-USDC trading pair on Cetus DEX.",
        "SUI-USDC LP",
    ),
    (
        "flowx-lending",
        "FlowX Finance",
        "💸",
        Category::Lending,
        RiskTier::Moderate,
        dec!(11.5),
        dec!(5_200_000),
        true,
        "Innovative lending protocol with leverage options on Sui.",
        "SUI",
    ),
    (
        "turbos-farming",
        "Turbos",
        "🚀",
        Category::Farming,
        RiskTier::High,
        dec!(28.5),
        dec!(3_800_000),
        false,
        "High yield farming strategy with auto-compounding.",
        "TURBOS",
    ),
    (
        "kriya-stablecoin",
        "Kriya Finance",
        "💎",
        Category::Farming,
        RiskTier::High,
        dec!(22.3),
        dec!(4_200_000),
        false,
        "Yield farming with Sui stablecoins and synthetic assets.",
        "kUSD",
    ),
];
