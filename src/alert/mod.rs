//! Alerting subsystem.
//!
//! # Data Flow
//! ```text
//! Probe observation
//!     → detector.rs (compare against last observed pool)
//!     → FailoverEvent (old pool, new pool)
//!     → dispatcher.rs (cooldown gate, then delivery)
//!     → webhook.rs (single best-effort POST)
//! ```
//!
//! # Design Decisions
//! - Detection is pure state transition; delivery is the only I/O
//! - Cooldown advances only on successful delivery, so a broken channel
//!   keeps retrying on the next occurrence rather than going silent
//! - ErrorRate is reserved: configured, cooldown-tracked, never raised

pub mod cooldown;
pub mod detector;
pub mod dispatcher;
pub mod types;
pub mod webhook;

pub use cooldown::CooldownGate;
pub use detector::FailoverDetector;
pub use dispatcher::{AlertDispatcher, DispatchOutcome};
pub use types::{AlertType, FailoverEvent};
pub use webhook::{NotifyError, WebhookNotifier};
