//! Dashboard
//!
//! Polls the relay's balance endpoints and prints the latest good snapshot
//! whenever it changes. Runs until interrupted.

use anyhow::Context;
use balance_relay::{
    dashboard::{render, DashboardPoller, RelayClient},
    shared::logging::LoggingUtils,
    AppConfig,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    LoggingUtils::initialize(&config.logging.level)?;

    let client = RelayClient::new(&config.dashboard).context("Failed to create relay client")?;
    info!(
        relay = %config.dashboard.relay_url,
        interval_secs = config.dashboard.poll_interval_seconds,
        "Dashboard polling relay"
    );

    let poller = DashboardPoller::spawn(Arc::new(client), config.dashboard.poll_interval());
    let mut updates = poller.subscribe();

    println!("{}", render(&poller.current()));

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                println!("{}", render(&snapshot));
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down dashboard");
                break;
            }
        }
    }

    poller.shutdown().await;
    Ok(())
}
