//! Pool probing subsystem.
//!
//! # Data Flow
//! ```text
//! Periodic timer (watcher)
//!     → GET monitored endpoint with bounded timeout
//!     → classify: header present / header absent / probe failed
//!     → ProbeOutcome fed to the failover detector
//! ```
//!
//! # Design Decisions
//! - Every failure mode is recoverable; nothing a probe does can kill the loop
//! - Outcomes are typed so tests can distinguish what the runtime swallows

pub mod prober;

pub use prober::{PoolId, ProbeError, ProbeOutcome, Prober};
