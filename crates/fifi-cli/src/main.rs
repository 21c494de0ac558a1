//! FiFi CLI - Personal finance coach
//!
//! Usage:
//!   fifi derive --demo           Derive a profile from onboarding answers
//!   fifi ask "what is a budget"  Ask the advisor one question
//!   fifi chat                    Chat with the advisor
//!   fifi simulate --ticks 30     Simulate background spending
//!   fifi serve --port 3000       Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use fifi_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Derive { survey, json } => commands::cmd_derive(&survey.to_answers(), json),
        Commands::Ask { question, json } => commands::cmd_ask(&question, json),
        Commands::Chat => commands::cmd_chat(),
        Commands::Simulate {
            survey,
            ticks,
            seed,
        } => commands::cmd_simulate(&config, &survey.to_answers(), ticks, seed).await,
        Commands::Dashboard { survey } => {
            commands::cmd_dashboard(&config, &survey.to_answers()).await
        }
        Commands::Config => commands::cmd_config(&config, cli.config.as_deref()),
        Commands::Serve {
            port,
            host,
            subscriptions,
            allowed_origins,
        } => {
            commands::cmd_serve(
                &config,
                &host,
                port,
                subscriptions.as_deref(),
                allowed_origins,
            )
            .await
        }
    }
}
