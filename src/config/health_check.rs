//! Probe configuration for subscription health checking.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Generate the default subscription name for an unconfigured probe.
///
/// The name is unique per construction (`subscription-<uuid>`), so an
/// application that never sets `subscription` cannot collide with a real
/// subscription shared by another deployment.
pub fn default_subscription_name() -> String {
    format!("subscription-{}", Uuid::new_v4())
}

/// Configuration for the subscription pull probe.
///
/// Plain data holder bound once at startup; fields stay mutable but are not
/// re-read after wiring resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Whether probe wiring is enabled
    pub enabled: bool,
    /// Subscription to probe by pulling a message
    pub subscription: String,
    /// Milliseconds to wait for the pull before giving up
    pub timeout_millis: u64,
}

impl HealthCheckConfig {
    /// Pull timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            subscription: default_subscription_name(),
            timeout_millis: 1000,
        }
    }
}
