//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs and value ranges (intervals > 0, header non-empty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WatcherConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::WatcherConfig;

/// A single validation failure, identified by the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &WatcherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Url::parse(&config.probe.endpoint).is_err() {
        errors.push(ValidationError::new("probe.endpoint", "must be a valid URL"));
    }
    if config.probe.header.trim().is_empty() {
        errors.push(ValidationError::new("probe.header", "must not be empty"));
    }
    if config.probe.interval_secs == 0 {
        errors.push(ValidationError::new("probe.interval_secs", "must be greater than zero"));
    }
    if config.probe.timeout_secs == 0 {
        errors.push(ValidationError::new("probe.timeout_secs", "must be greater than zero"));
    }

    // Empty webhook URL is allowed: delivery is simply disabled.
    if !config.alerts.webhook_url.is_empty() && Url::parse(&config.alerts.webhook_url).is_err() {
        errors.push(ValidationError::new("alerts.webhook_url", "must be a valid URL"));
    }
    if config.alerts.timeout_secs == 0 {
        errors.push(ValidationError::new("alerts.timeout_secs", "must be greater than zero"));
    }

    if config.error_rate.threshold < 0.0 {
        errors.push(ValidationError::new("error_rate.threshold", "must not be negative"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
