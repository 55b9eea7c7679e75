//! The watch loop.
//!
//! # Responsibilities
//! - Tick on a fixed interval after a warm-up delay
//! - Probe once per tick and feed the observation to the detector
//! - Dispatch a failover alert when the active pool changes
//! - Swallow every per-tick failure so the loop never dies
//!
//! # Design Decisions
//! - Fixed-interval polling; the monitored proxy offers no push interface
//! - Worst-case tick latency is bounded by the probe and delivery timeouts

use std::time::Duration;

use chrono::Local;
use tokio::sync::broadcast;
use tokio::time;

use crate::alert::{AlertDispatcher, AlertType, FailoverDetector, FailoverEvent};
use crate::config::WatcherConfig;
use crate::probe::{ProbeOutcome, Prober};

/// Single-instance watcher owning all probe and alert state.
pub struct PoolWatcher {
    prober: Prober,
    detector: FailoverDetector,
    dispatcher: AlertDispatcher,
    config: WatcherConfig,
}

impl PoolWatcher {
    pub fn new(config: WatcherConfig) -> Self {
        Self {
            prober: Prober::new(config.probe.clone()),
            detector: FailoverDetector::new(),
            dispatcher: AlertDispatcher::new(&config.alerts),
            config,
        }
    }

    /// Run until the shutdown signal fires.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            endpoint = %self.config.probe.endpoint,
            interval_secs = self.config.probe.interval_secs,
            startup_delay_secs = self.config.probe.startup_delay_secs,
            "Pool watcher starting"
        );

        let warmup = Duration::from_secs(self.config.probe.startup_delay_secs);
        tokio::select! {
            _ = time::sleep(warmup) => {}
            _ = shutdown.recv() => {
                tracing::info!("Pool watcher shut down during warm-up");
                return;
            }
        }

        let mut ticker = time::interval(Duration::from_secs(self.config.probe.interval_secs));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Pool watcher received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// One probe/dispatch cycle. Never fails; every error is handled here.
    pub async fn tick(&mut self) {
        let outcome = self.prober.check().await;
        match &outcome {
            ProbeOutcome::PoolObserved(pool) => {
                tracing::debug!(pool = %pool, "Probe observed pool");
            }
            ProbeOutcome::HeaderMissing => {
                tracing::debug!("Probe response carried no pool header");
            }
            ProbeOutcome::Failed(e) => {
                tracing::debug!(error = %e, "Probe failed");
            }
        }

        if let Some(event) = self.detector.observe(outcome.pool()) {
            tracing::warn!(from = %event.from, to = %event.to, "Failover detected");
            let message = format_failover(&event);
            let _ = self
                .dispatcher
                .dispatch(&message, AlertType::Failover)
                .await;
        }
    }
}

/// Alert text for the notification channel.
fn format_failover(event: &FailoverEvent) -> String {
    format!(
        "🚨 *Pool Watcher Alert* 🚨\n\n*Failover!*\n{} → {}\nTime: {}",
        event.from,
        event.to,
        Local::now().format("%Y-%m-%d %H:%M:%S"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::PoolId;

    #[test]
    fn failover_message_names_both_pools() {
        let event = FailoverEvent {
            from: PoolId::new("blue"),
            to: PoolId::new("green"),
        };

        let message = format_failover(&event);

        assert!(message.contains("Failover!"));
        assert!(message.contains("blue → green"));
        assert!(message.contains("Time:"));
    }
}
