//! Sui Strategy Agent
//!
//! Command-line front end for the strategy engine: validates input, waits a
//! moment like a remote service would, then prints recommendations.

mod cli;
mod config;
mod render;
mod state;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, UserError};
use crate::config::AgentConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so stdout stays clean for --json)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(user) = e.downcast_ref::<UserError>() {
                eprintln!("{user}");
            } else {
                tracing::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AgentConfig::from_env()?;
    let mut state = AppState::from_config(config)?;
    cli::run(cli, &mut state).await
}
