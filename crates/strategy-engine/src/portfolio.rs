//! Simulated Portfolio
//!
//! Executing a recommendation deploys nothing on-chain; it records an active
//! position whose profit is drawn uniformly from -1% to +2% of the principal.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Strategy;

const MIN_PROFIT_FRACTION: f64 = -0.01;
const MAX_PROFIT_FRACTION: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Active,
    Pending,
    Completed,
}

/// A strategy that has been "executed"
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActiveStrategy {
    pub id: Uuid,

    pub strategy: Strategy,

    pub started_at: DateTime<Utc>,

    /// Principal deployed
    pub initial_investment: Decimal,

    /// Principal plus simulated profit
    pub current_value: Decimal,

    pub profit: Decimal,

    pub profit_percent: Decimal,

    pub status: PositionStatus,
}

/// All executed strategies
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub strategies: Vec<ActiveStrategy>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `strategy` with `amount`, drawing a simulated profit from `rng`
    pub fn execute<R: Rng + ?Sized>(
        &mut self,
        strategy: Strategy,
        amount: Decimal,
        rng: &mut R,
    ) -> &ActiveStrategy {
        let fraction: f64 = rng.gen_range(MIN_PROFIT_FRACTION..=MAX_PROFIT_FRACTION);
        let fraction = Decimal::from_f64_retain(fraction)
            .unwrap_or(Decimal::ZERO)
            .round_dp(6);
        let profit = amount * fraction;

        tracing::info!(
            protocol = %strategy.protocol.id,
            %amount,
            profit = %profit.round_dp(4),
            "executed strategy"
        );

        self.strategies.push(ActiveStrategy {
            id: Uuid::new_v4(),
            strategy,
            started_at: Utc::now(),
            initial_investment: amount,
            current_value: amount + profit,
            profit,
            profit_percent: fraction * dec!(100),
            status: PositionStatus::Active,
        });

        &self.strategies[self.strategies.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn total_invested(&self) -> Decimal {
        self.strategies.iter().map(|s| s.initial_investment).sum()
    }

    pub fn total_value(&self) -> Decimal {
        self.strategies.iter().map(|s| s.current_value).sum()
    }

    pub fn total_profit(&self) -> Decimal {
        self.total_value() - self.total_invested()
    }

    /// Profit as a percentage of principal; zero for an empty portfolio
    pub fn total_profit_percent(&self) -> Decimal {
        let invested = self.total_invested();
        if invested == Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.total_profit() / invested) * dec!(100)
    }
}
