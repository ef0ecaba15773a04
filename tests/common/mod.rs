//! Shared test utilities for Sentinel integration tests.
//!
//! Provides reusable helpers for building probe configs, templates, and
//! indicators to reduce duplication across test files.

#![allow(dead_code)]

use sentinel::config::HealthCheckConfig;
use sentinel::health::HealthIndicator;
use sentinel::template::{InMemoryTemplate, MessagePuller};
use std::sync::Arc;

/// Probe config with explicit, non-random values.
pub fn probe_config(subscription: &str, timeout_millis: u64) -> HealthCheckConfig {
    HealthCheckConfig {
        enabled: true,
        subscription: subscription.to_string(),
        timeout_millis,
    }
}

/// Template whose probe subscription exists and holds one message.
pub fn reachable_template(subscription: &str) -> Arc<InMemoryTemplate> {
    let template = Arc::new(InMemoryTemplate::new());
    template.create_subscription(subscription);
    template.publish(subscription, b"ping").unwrap();
    template
}

/// Indicator wired to a fresh in-memory template.
pub fn make_indicator(subscription: &str) -> Arc<HealthIndicator> {
    let template: Arc<dyn MessagePuller> = Arc::new(InMemoryTemplate::new());
    Arc::new(HealthIndicator::new(
        template,
        &probe_config(subscription, 1000),
    ))
}
