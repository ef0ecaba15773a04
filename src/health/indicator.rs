//! Subscription pull probe.

use super::status::Health;
use crate::config::HealthCheckConfig;
use crate::template::{MessagePuller, PullError};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Health indicator for one messaging template.
///
/// Probes connectivity by pulling at most one message from the configured
/// subscription, bounded by the configured timeout. One probe per call; no
/// retry.
pub struct HealthIndicator {
    template: Arc<dyn MessagePuller>,
    subscription: String,
    timeout: Duration,
}

impl HealthIndicator {
    /// Create an indicator wired to a template, binding the probe
    /// subscription and timeout from configuration.
    pub fn new(template: Arc<dyn MessagePuller>, config: &HealthCheckConfig) -> Self {
        Self {
            template,
            subscription: config.subscription.clone(),
            timeout: config.timeout(),
        }
    }

    /// Subscription this indicator probes.
    pub fn subscription(&self) -> &str {
        &self.subscription
    }

    /// Probe timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one probe.
    ///
    /// Reaching the backend is the signal: an answered pull reports up even
    /// when the subscription is missing or unreadable, since the generated
    /// default subscription is not expected to exist. No answer within the
    /// timeout reports unknown; any other error reports down.
    pub async fn check(&self) -> Health {
        let start = Instant::now();
        let outcome =
            tokio::time::timeout(self.timeout, self.template.pull(&self.subscription, 1)).await;

        let latency_seconds = start.elapsed().as_secs_f64();
        metrics::histogram!("sentinel_probe_latency_seconds",
            "subscription" => self.subscription.clone()
        )
        .record(latency_seconds);

        match outcome {
            Ok(Ok(messages)) => Health::up()
                .with_detail("subscription", &self.subscription)
                .with_detail("messages", messages.len().to_string()),
            Ok(Err(e @ (PullError::NotFound(_) | PullError::PermissionDenied(_)))) => {
                tracing::debug!(
                    subscription = %self.subscription,
                    reply = %e,
                    "Backend answered probe with an expected error"
                );
                Health::up()
                    .with_detail("subscription", &self.subscription)
                    .with_detail("note", e.to_string())
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    subscription = %self.subscription,
                    error = %e,
                    "Subscription probe failed"
                );
                Health::down()
                    .with_detail("subscription", &self.subscription)
                    .with_detail("error", e.to_string())
            }
            Err(_) => Health::unknown()
                .with_detail("subscription", &self.subscription)
                .with_detail(
                    "timeout",
                    format!("no response within {}ms", self.timeout.as_millis()),
                ),
        }
    }
}
