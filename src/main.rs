//! Pool failover watcher.
//!
//! Periodically probes a reverse proxy for the backend pool currently
//! serving traffic and raises a rate-limited webhook alert when the
//! active pool changes.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────── POOL WATCHER ────────────────────────────┐
//!   │                                                                      │
//!   │  timer tick ──▶ probe ──▶ failover detector ──▶ alert dispatcher ────┼─▶ webhook
//!   │                   │            (last pool)        (cooldown gate)    │
//!   │                   ▼                                                  │
//!   │          monitored endpoint                                          │
//!   │          (X-App-Pool header)                                         │
//!   │                                                                      │
//!   │  Cross-cutting: config (TOML + env) · tracing · shutdown broadcast   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pool_watcher::config::{load_config, validate_config};
use pool_watcher::{PoolWatcher, Shutdown, WatcherConfig};

#[derive(Parser)]
#[command(name = "pool-watcher")]
#[command(about = "Failover watcher for reverse proxy backend pools", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pool_watcher=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("pool-watcher v0.1.0 starting");

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WatcherConfig::default(),
    };
    config.apply_env_overrides();

    // Re-validate after overrides: the env can inject a broken URL too.
    if let Err(errors) = validate_config(&config) {
        for e in &errors {
            tracing::error!(field = %e.field, message = %e.message, "Invalid configuration");
        }
        return Err("configuration validation failed".into());
    }

    if config.alerts.webhook_url.is_empty() {
        tracing::warn!("No webhook URL configured; failovers will be logged but not delivered");
    }

    tracing::info!(
        endpoint = %config.probe.endpoint,
        header = %config.probe.header,
        interval_secs = config.probe.interval_secs,
        cooldown_secs = config.alerts.cooldown_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let watcher = PoolWatcher::new(config);
    let handle = tokio::spawn(watcher.run(shutdown.subscribe()));

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
    let _ = handle.await;

    tracing::info!("Shutdown complete");
    Ok(())
}
