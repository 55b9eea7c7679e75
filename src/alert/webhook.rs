//! Best-effort webhook delivery.
//!
//! # Responsibilities
//! - POST `{"text": ...}` to the configured webhook with a bounded timeout
//! - Classify failures so the dispatcher can decide what counts as sent
//!
//! # Design Decisions
//! - Exactly one attempt per call; retry policy lives with the caller
//!   (which deliberately has none)

use std::time::Duration;

use serde_json::json;
use thiserror::Error;

use crate::config::AlertConfig;

/// Why a delivery attempt failed.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("no webhook URL configured")]
    NotConfigured,

    #[error("delivery timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    #[error("webhook returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Delivers alert messages to a Slack-compatible webhook.
pub struct WebhookNotifier {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(config: &AlertConfig) -> Self {
        Self {
            url: config.webhook_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            client: reqwest::Client::new(),
        }
    }

    /// Single best-effort POST. No retries.
    pub async fn send(&self, message: &str) -> Result<(), NotifyError> {
        if self.url.is_empty() {
            return Err(NotifyError::NotConfigured);
        }

        let payload = json!({ "text": message });

        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout
                } else {
                    NotifyError::Transport(e)
                }
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(NotifyError::Status(response.status()))
        }
    }
}
