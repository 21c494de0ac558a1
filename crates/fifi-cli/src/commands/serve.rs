//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use fifi_core::catalog::read_subscriptions;
use fifi_core::Config;

pub async fn cmd_serve(
    config: &Config,
    host: &str,
    port: u16,
    subscriptions: Option<&Path>,
    allowed_origins: Vec<String>,
) -> Result<()> {
    println!("🚀 Starting FiFi web server...");
    println!("   Listening: http://{}:{}", host, port);

    let subscriptions = match subscriptions {
        Some(path) => {
            let loaded = read_subscriptions(path).with_context(|| {
                format!("Failed to load subscriptions from {}", path.display())
            })?;
            println!(
                "   Subscriptions: {} from {}",
                loaded.len(),
                path.display()
            );
            loaded
        }
        None => Vec::new(),
    };

    if config.simulator.enabled {
        println!(
            "   🎲 Spending simulator: every {}s (p = {:.2})",
            config.simulator.interval.as_secs(),
            config.simulator.probability
        );
    } else {
        println!("   Spending simulator: disabled");
    }
    if !allowed_origins.is_empty() {
        println!("   CORS origins: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let server_config = fifi_server::ServerConfig {
        allowed_origins,
        subscriptions,
    };

    fifi_server::serve(config, host, port, server_config).await?;

    Ok(())
}
