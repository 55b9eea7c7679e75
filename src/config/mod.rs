//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → environment overrides (SLACK_WEBHOOK_URL)
//!     → WatcherConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the watcher runs with no config file
//! - Validation separates syntactic (serde) from semantic checks
//! - The webhook secret comes from the environment in deployments

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AlertConfig, ErrorRateConfig, ObservabilityConfig, ProbeConfig, WatcherConfig};
pub use validation::{validate_config, ValidationError};
