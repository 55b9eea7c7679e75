//! Alert types and events.

use std::fmt;

use crate::probe::PoolId;

/// Kind of alert, used as the cooldown key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertType {
    /// The active pool changed between two successful probes.
    Failover,

    /// Error-rate threshold breach. Reserved: configuration exists but
    /// nothing raises this yet.
    ErrorRate,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Failover => "failover",
            AlertType::ErrorRate => "error_rate",
        }
    }
}

/// A detected change of the active pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverEvent {
    /// Pool that was serving traffic before the change.
    pub from: PoolId,

    /// Pool observed serving traffic now.
    pub to: PoolId,
}

impl fmt::Display for FailoverEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}
