//! Failover detection.
//!
//! # State Transitions
//! ```text
//! unknown → known A:  first successful probe seeds state, no event
//! known A → A:        no-op
//! known A → B:        FailoverEvent { from: A, to: B }
//! any     → absent:   failed probe, state untouched
//! ```

use crate::probe::PoolId;

use super::types::FailoverEvent;

/// Tracks the last observed pool and detects changes between
/// consecutive successful probes.
#[derive(Debug, Default)]
pub struct FailoverDetector {
    last_pool: Option<PoolId>,
}

impl FailoverDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one probe observation.
    ///
    /// Returns the failover event when the pool changed between two
    /// successful probes. The first-ever observation only seeds state.
    /// `None` (a failed probe) leaves state untouched.
    pub fn observe(&mut self, new_pool: Option<PoolId>) -> Option<FailoverEvent> {
        let new_pool = new_pool?;

        let event = match &self.last_pool {
            Some(last) if *last != new_pool => Some(FailoverEvent {
                from: last.clone(),
                to: new_pool.clone(),
            }),
            _ => None,
        };

        self.last_pool = Some(new_pool);
        event
    }

    /// The most recently observed pool, if any probe has succeeded yet.
    pub fn last_pool(&self) -> Option<&PoolId> {
        self.last_pool.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_seeds_without_event() {
        let mut detector = FailoverDetector::new();

        let event = detector.observe(Some(PoolId::new("blue")));

        assert!(event.is_none());
        assert_eq!(detector.last_pool(), Some(&PoolId::new("blue")));
    }

    #[test]
    fn unchanged_pool_produces_no_event() {
        let mut detector = FailoverDetector::new();
        detector.observe(Some(PoolId::new("blue")));

        assert!(detector.observe(Some(PoolId::new("blue"))).is_none());
    }

    #[test]
    fn pool_change_produces_event_and_updates_state() {
        let mut detector = FailoverDetector::new();
        detector.observe(Some(PoolId::new("blue")));

        let event = detector.observe(Some(PoolId::new("green"))).unwrap();

        assert_eq!(event.from, PoolId::new("blue"));
        assert_eq!(event.to, PoolId::new("green"));
        assert_eq!(detector.last_pool(), Some(&PoolId::new("green")));
    }

    #[test]
    fn failed_probe_leaves_state_untouched() {
        let mut detector = FailoverDetector::new();
        detector.observe(Some(PoolId::new("blue")));

        assert!(detector.observe(None).is_none());
        assert_eq!(detector.last_pool(), Some(&PoolId::new("blue")));

        // A change observed after the gap still references the pool
        // from before the failed probes.
        let event = detector.observe(Some(PoolId::new("green"))).unwrap();
        assert_eq!(event.from, PoolId::new("blue"));
    }

    #[test]
    fn failed_probe_before_first_observation_is_noop() {
        let mut detector = FailoverDetector::new();

        assert!(detector.observe(None).is_none());
        assert_eq!(detector.last_pool(), None);
    }
}
