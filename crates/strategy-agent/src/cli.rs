//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use serde::Serialize;

use strategy_engine::{
    historical_yield_with_rng, parse_intent, validate_amount, Portfolio, RiskLevel, StrategyRequest,
};

use crate::render;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "strategy-agent", about = "DeFi yield strategy agent for Sui", version)]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend strategies for an amount and risk level
    Recommend {
        /// Amount of SUI to invest
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// conservative, moderate or aggressive
        #[arg(short, long, default_value = "moderate")]
        risk: String,
    },
    /// Recommend strategies from a plain-English request
    Ask {
        /// e.g. "I want a low risk strategy for 50 SUI"
        prompt: Vec<String>,
    },
    /// List the protocol catalog with security scores
    Protocols,
    /// Show a simulated daily yield history for a protocol
    History {
        protocol: String,
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },
    /// Execute a recommended strategy into a simulated portfolio
    Simulate {
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long, default_value = "moderate")]
        risk: String,
        /// Which recommendation to execute (1-based)
        #[arg(short, long, default_value_t = 1)]
        pick: usize,
    },
}

/// Outcome of a command that the user should see as a plain message
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UserError(pub String);

pub async fn run(cli: Cli, state: &mut AppState) -> anyhow::Result<()> {
    match cli.command {
        Command::Recommend { amount, risk } => {
            let amount = validate_amount(&amount).map_err(|e| UserError(e.to_string()))?;
            let request = StrategyRequest::new(amount, RiskLevel::from(risk.as_str()));
            recommend(state, &request, cli.json).await
        }
        Command::Ask { prompt } => {
            let prompt = prompt.join(" ");
            let request = parse_intent(&prompt).map_err(|e| UserError(e.to_string()))?;
            tracing::info!(%prompt, amount = %request.amount, risk = %request.risk_level, "understood request");
            recommend(state, &request, cli.json).await
        }
        Command::Protocols => {
            let catalog = state.engine.catalog();
            if cli.json {
                let protocols: Vec<_> = catalog.iter().collect();
                print_json(&protocols)
            } else {
                print!("{}", render::protocols(catalog));
                Ok(())
            }
        }
        Command::History { protocol, days } => {
            let protocol = state.engine.catalog().require(&protocol)?.clone();
            let samples = historical_yield_with_rng(&protocol, days, &mut state.rng);
            if cli.json {
                print_json(&samples)
            } else {
                print!("{}", render::history(&protocol, &samples));
                Ok(())
            }
        }
        Command::Simulate { amount, risk, pick } => {
            let amount = validate_amount(&amount).map_err(|e| UserError(e.to_string()))?;
            let request = StrategyRequest::new(amount, RiskLevel::from(risk.as_str()));
            let strategies = generate(state, &request).await?;

            let count = strategies.len();
            let strategy = pick
                .checked_sub(1)
                .and_then(|i| strategies.into_iter().nth(i))
                .ok_or_else(|| UserError(format!("--pick must be between 1 and {count}")))?;

            let mut portfolio = Portfolio::new();
            portfolio.execute(strategy, amount, &mut state.rng);

            if cli.json {
                print_json(&portfolio)
            } else {
                print!("{}", render::portfolio(&portfolio));
                Ok(())
            }
        }
    }
}

async fn generate(state: &AppState, request: &StrategyRequest) -> anyhow::Result<Vec<strategy_engine::Strategy>> {
    // Cosmetic delay standing in for a remote call
    if !state.config.latency.is_zero() {
        tracing::debug!(latency = ?state.config.latency, "thinking");
        tokio::time::sleep(state.config.latency).await;
    }

    let mood = state.feed.current_mood().await?;
    Ok(state.engine.generate_for_mood(request, mood))
}

async fn recommend(state: &AppState, request: &StrategyRequest, json: bool) -> anyhow::Result<()> {
    let strategies = generate(state, request).await?;
    if strategies.len() < strategy_engine::MAX_STRATEGIES {
        tracing::warn!(found = strategies.len(), "catalog could not supply a full set of strategies");
    }

    if json {
        print_json(&strategies)
    } else {
        print!("{}", render::strategies(&strategies, request.amount, request.risk_level));
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::try_parse_from(["strategy-agent", "recommend", "--amount", "50", "--risk", "aggressive"]).unwrap();
        match cli.command {
            Command::Recommend { amount, risk } => {
                assert_eq!(amount, "50");
                assert_eq!(risk, "aggressive");
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(!cli.json);
    }

    #[test]
    fn test_negative_amount_reaches_validation() {
        let cli = Cli::try_parse_from(["strategy-agent", "recommend", "-a", "-5"]).unwrap();
        match cli.command {
            Command::Recommend { amount, .. } => assert!(validate_amount(&amount).is_err()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_ask_joins_words() {
        let cli = Cli::try_parse_from(["strategy-agent", "--json", "ask", "low", "risk", "for", "50", "SUI"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Ask { prompt } => assert_eq!(prompt.join(" "), "low risk for 50 SUI"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::try_parse_from(["strategy-agent", "simulate", "--amount", "10"]).unwrap();
        match cli.command {
            Command::Simulate { risk, pick, .. } => {
                assert_eq!(risk, "moderate");
                assert_eq!(pick, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
