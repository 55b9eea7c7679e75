//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the watcher.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the pool watcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WatcherConfig {
    /// Probe settings (endpoint, header, timing).
    pub probe: ProbeConfig,

    /// Alert delivery settings (webhook, cooldown).
    pub alerts: AlertConfig,

    /// Error-rate alerting thresholds (reserved, not yet wired).
    pub error_rate: ErrorRateConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl WatcherConfig {
    /// Apply environment overrides. `SLACK_WEBHOOK_URL` wins over the
    /// file value so deployments can keep the secret out of the config.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SLACK_WEBHOOK_URL") {
            if !url.is_empty() {
                self.alerts.webhook_url = url;
            }
        }
    }
}

/// Probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Monitored endpoint probed on every tick.
    pub endpoint: String,

    /// Response header carrying the active pool label.
    pub header: String,

    /// Seconds between probe ticks.
    pub interval_secs: u64,

    /// Per-probe timeout in seconds.
    pub timeout_secs: u64,

    /// Warm-up delay before the first tick, in seconds.
    pub startup_delay_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://nginx:80/version".to_string(),
            header: "X-App-Pool".to_string(),
            interval_secs: 2,
            timeout_secs: 2,
            startup_delay_secs: 5,
        }
    }
}

/// Alert delivery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Webhook URL for alert delivery. Empty disables delivery.
    pub webhook_url: String,

    /// Delivery timeout in seconds.
    pub timeout_secs: u64,

    /// Minimum seconds between two delivered alerts of the same type.
    pub cooldown_secs: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            timeout_secs: 5,
            cooldown_secs: 60,
        }
    }
}

/// Error-rate alerting thresholds.
///
/// Declared for forward compatibility; no computation reads these yet.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ErrorRateConfig {
    /// Error percentage that would trigger an alert.
    pub threshold: f64,

    /// Number of requests in the sliding window.
    pub window_size: usize,
}

impl Default for ErrorRateConfig {
    fn default() -> Self {
        Self {
            threshold: 2.0,
            window_size: 200,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
