//! Cooldown-gated alert dispatch.

use std::time::{Duration, Instant};

use crate::config::AlertConfig;

use super::cooldown::CooldownGate;
use super::types::AlertType;
use super::webhook::{NotifyError, WebhookNotifier};

/// Outcome of a dispatch attempt.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Delivered; the cooldown window for this type restarted.
    Sent,

    /// Inside the cooldown window; nothing was sent.
    Suppressed,

    /// Delivery failed; the cooldown timestamp did not advance, so the
    /// next occurrence attempts delivery immediately.
    Failed(NotifyError),
}

/// Owns cooldown state and the notification channel.
pub struct AlertDispatcher {
    notifier: WebhookNotifier,
    cooldowns: CooldownGate,
}

impl AlertDispatcher {
    pub fn new(config: &AlertConfig) -> Self {
        Self {
            notifier: WebhookNotifier::new(config),
            cooldowns: CooldownGate::new(Duration::from_secs(config.cooldown_secs)),
        }
    }

    /// Attempt one cooldown-gated delivery.
    ///
    /// A failed send does not count as sent: persistent channel failure
    /// biases toward eventually notifying rather than suppressing.
    pub async fn dispatch(&mut self, message: &str, alert_type: AlertType) -> DispatchOutcome {
        let now = Instant::now();

        if !self.cooldowns.allows(alert_type, now) {
            tracing::debug!(alert_type = alert_type.as_str(), "Alert suppressed by cooldown");
            return DispatchOutcome::Suppressed;
        }

        match self.notifier.send(message).await {
            Ok(()) => {
                self.cooldowns.record_sent(alert_type, now);
                tracing::info!(alert_type = alert_type.as_str(), "Alert delivered");
                DispatchOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(
                    alert_type = alert_type.as_str(),
                    error = %e,
                    "Alert delivery failed, will re-attempt on next occurrence"
                );
                DispatchOutcome::Failed(e)
            }
        }
    }
}
