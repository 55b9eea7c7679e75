//! Active pool probing.
//!
//! # Responsibilities
//! - Probe the monitored endpoint once per tick
//! - Extract the active pool label from the response header

use std::time::Duration;

use thiserror::Error;

use crate::config::ProbeConfig;

/// Opaque label of the backend pool that answered a probe.
///
/// Compared by exact string equality; the watcher attaches no meaning
/// to the label beyond "same" or "different".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolId(String);

impl PoolId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a probe produced no pool observation.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    #[error("pool header value is not valid text")]
    BadHeaderValue,
}

/// Classified result of a single probe.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The pool header was present; carries the trimmed label.
    PoolObserved(PoolId),

    /// The endpoint answered but did not include the pool header.
    HeaderMissing,

    /// The probe itself failed. The loop treats this like a missing header.
    Failed(ProbeError),
}

impl ProbeOutcome {
    /// The observed pool, if any. Failures and missing headers collapse
    /// to `None`, which is all the failover detector needs to know.
    pub fn pool(self) -> Option<PoolId> {
        match self {
            ProbeOutcome::PoolObserved(pool) => Some(pool),
            ProbeOutcome::HeaderMissing | ProbeOutcome::Failed(_) => None,
        }
    }
}

/// Issues bounded-timeout probes against the monitored endpoint.
pub struct Prober {
    config: ProbeConfig,
    client: reqwest::Client,
}

impl Prober {
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Issue one probe and classify the result. Never panics and never
    /// returns a fatal error; the caller decides what to log.
    pub async fn check(&self) -> ProbeOutcome {
        let response = match self
            .client
            .get(&self.config.endpoint)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return ProbeOutcome::Failed(ProbeError::Timeout),
            Err(e) => return ProbeOutcome::Failed(ProbeError::Transport(e)),
        };

        match response.headers().get(self.config.header.as_str()) {
            Some(value) => match value.to_str() {
                Ok(text) => ProbeOutcome::PoolObserved(PoolId::new(text.trim())),
                Err(_) => ProbeOutcome::Failed(ProbeError::BadHeaderValue),
            },
            None => ProbeOutcome::HeaderMissing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_collapses_to_optional_pool() {
        let observed = ProbeOutcome::PoolObserved(PoolId::new("blue"));
        assert_eq!(observed.pool(), Some(PoolId::new("blue")));

        assert_eq!(ProbeOutcome::HeaderMissing.pool(), None);
        assert_eq!(ProbeOutcome::Failed(ProbeError::Timeout).pool(), None);
    }

    #[test]
    fn pool_ids_compare_by_exact_label() {
        assert_eq!(PoolId::new("blue"), PoolId::new("blue"));
        assert_ne!(PoolId::new("blue"), PoolId::new("Blue"));
    }
}
