//! Per-alert-type cooldown tracking.
//!
//! Guarantees at most one delivered alert per type per window, even
//! under rapid pool oscillation. Timestamps advance only on successful
//! delivery; a failed send leaves the gate open for the next attempt.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::types::AlertType;

/// Tracks the last successful delivery time per alert type.
///
/// Parameterized on `Instant` so tests drive time explicitly instead
/// of sleeping.
#[derive(Debug)]
pub struct CooldownGate {
    window: Duration,
    last_sent: HashMap<AlertType, Instant>,
}

impl CooldownGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_sent: HashMap::new(),
        }
    }

    /// True if an alert of this type may be sent at `now`. Alerts of a
    /// type that has never been delivered are always allowed.
    pub fn allows(&self, alert_type: AlertType, now: Instant) -> bool {
        match self.last_sent.get(&alert_type) {
            Some(last) => now.duration_since(*last) >= self.window,
            None => true,
        }
    }

    /// Record a successful delivery. Call only after the send succeeded.
    pub fn record_sent(&mut self, alert_type: AlertType, now: Instant) {
        self.last_sent.insert(alert_type, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_alert_always_allowed() {
        let gate = CooldownGate::new(Duration::from_secs(60));
        assert!(gate.allows(AlertType::Failover, Instant::now()));
    }

    #[test]
    fn suppresses_within_window_and_reopens_after() {
        let mut gate = CooldownGate::new(Duration::from_secs(60));
        let t0 = Instant::now();
        gate.record_sent(AlertType::Failover, t0);

        assert!(!gate.allows(AlertType::Failover, t0 + Duration::from_secs(5)));
        assert!(!gate.allows(AlertType::Failover, t0 + Duration::from_secs(59)));
        assert!(gate.allows(AlertType::Failover, t0 + Duration::from_secs(60)));
    }

    #[test]
    fn alert_types_cool_down_independently() {
        let mut gate = CooldownGate::new(Duration::from_secs(60));
        let t0 = Instant::now();
        gate.record_sent(AlertType::Failover, t0);

        assert!(gate.allows(AlertType::ErrorRate, t0 + Duration::from_secs(1)));
    }

    #[test]
    fn unrecorded_send_does_not_start_a_window() {
        // Delivery failures never call record_sent, so the gate stays open.
        let gate = CooldownGate::new(Duration::from_secs(60));
        let t0 = Instant::now();

        assert!(gate.allows(AlertType::Failover, t0));
        assert!(gate.allows(AlertType::Failover, t0 + Duration::from_secs(1)));
    }
}
