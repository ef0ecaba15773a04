//! Configuration module for Sentinel
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`SENTINEL_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use sentinel::config::SentinelConfig;
//!
//! // Load defaults
//! let config = SentinelConfig::default();
//! assert_eq!(config.health_check.timeout_millis, 1000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [health_check]
//! timeout_millis = 1500
//! "#;
//! let config: SentinelConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.health_check.timeout_millis, 1500);
//! ```

pub mod error;
pub mod health_check;
pub mod logging;
pub mod pubsub;

pub use error::ConfigError;
pub use health_check::{default_subscription_name, HealthCheckConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use pubsub::{PubSubConfig, TemplateConfig};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Unified configuration for Sentinel.
///
/// Aggregates the messaging integration, the probe settings, and logging.
///
/// # Example
///
/// ```rust
/// use sentinel::config::SentinelConfig;
///
/// let config = SentinelConfig::default();
/// assert!(config.pubsub.enabled);
/// assert!(config.health_check.enabled);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SentinelConfig {
    /// Messaging integration settings
    pub pubsub: PubSubConfig,
    /// Subscription probe settings
    pub health_check: HealthCheckConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl SentinelConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports SENTINEL_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(pubsub) = std::env::var("SENTINEL_PUBSUB") {
            self.pubsub.enabled = pubsub.to_lowercase() == "true";
        }
        if let Ok(project) = std::env::var("SENTINEL_PROJECT_ID") {
            self.pubsub.project_id = project;
        }

        if let Ok(health) = std::env::var("SENTINEL_HEALTH_CHECK") {
            self.health_check.enabled = health.to_lowercase() == "true";
        }
        if let Ok(subscription) = std::env::var("SENTINEL_HEALTH_SUBSCRIPTION") {
            self.health_check.subscription = subscription;
        }
        if let Ok(timeout) = std::env::var("SENTINEL_HEALTH_TIMEOUT_MILLIS") {
            if let Ok(t) = timeout.parse() {
                self.health_check.timeout_millis = t;
            }
        }

        if let Ok(level) = std::env::var("SENTINEL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SENTINEL_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.health_check.timeout_millis == 0 {
            return Err(ConfigError::Validation {
                field: "health_check.timeout_millis".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (i, template) in self.pubsub.templates.iter().enumerate() {
            if template.name.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("pubsub.templates[{}].name", i),
                    message: "name cannot be empty".to_string(),
                });
            }
            if !seen.insert(template.name.as_str()) {
                return Err(ConfigError::Validation {
                    field: format!("pubsub.templates[{}].name", i),
                    message: format!("duplicate template name '{}'", template.name),
                });
            }
        }

        Ok(())
    }
}
