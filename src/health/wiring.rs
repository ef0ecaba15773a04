//! Startup wiring decision.
//!
//! Replaces container-managed conditional registration with a pure function
//! over the facts the container would have consulted: the two enable flags,
//! a possible user-supplied indicator, and the set of registered templates.
//! The decision runs once at startup; changing any input requires a restart.

use super::contributor::CompositeContributor;
use super::error::WiringError;
use super::indicator::HealthIndicator;
use super::status::Health;
use crate::config::HealthCheckConfig;
use crate::template::MessagePuller;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Facts the wiring decision is made from.
pub struct WiringInputs {
    /// Global messaging-integration flag
    pub pubsub_enabled: bool,
    /// Health-check-specific flag
    pub health_check_enabled: bool,
    /// Indicator the application supplied itself, if any
    pub user_indicator: Option<Arc<HealthIndicator>>,
    /// Registered templates, keyed by registration name
    pub templates: BTreeMap<String, Arc<dyn MessagePuller>>,
}

/// Terminal wiring outcome, fixed for the process lifetime.
pub enum HealthWiring {
    /// Nothing is wired
    NoOp,
    /// One standalone indicator
    Single(Arc<HealthIndicator>),
    /// One indicator per template, grouped under a composite contributor
    Composite(CompositeContributor),
}

/// Decide the wiring outcome.
///
/// A user-supplied indicator always wins: automatic registration backs off
/// and the user's instance is what remains resolvable, whatever the template
/// count. Otherwise both enable flags must be set and at least one template
/// must exist; a sole template gets a standalone indicator, several get a
/// composite keyed by their registration names.
pub fn resolve(inputs: WiringInputs, config: &HealthCheckConfig) -> HealthWiring {
    if let Some(user) = inputs.user_indicator {
        tracing::debug!("User-supplied health indicator present, automatic wiring backs off");
        return HealthWiring::Single(user);
    }

    if !inputs.pubsub_enabled {
        tracing::debug!("Messaging integration disabled, health wiring skipped");
        return HealthWiring::NoOp;
    }

    if !inputs.health_check_enabled {
        tracing::debug!("Health check disabled, health wiring skipped");
        return HealthWiring::NoOp;
    }

    let mut indicators: BTreeMap<String, Arc<HealthIndicator>> = inputs
        .templates
        .into_iter()
        .map(|(name, template)| (name, Arc::new(HealthIndicator::new(template, config))))
        .collect();

    if indicators.is_empty() {
        return HealthWiring::NoOp;
    }

    if indicators.len() == 1 {
        if let Some((name, indicator)) = indicators.pop_first() {
            tracing::info!(
                template = %name,
                subscription = %indicator.subscription(),
                "Wired standalone subscription health indicator"
            );
            return HealthWiring::Single(indicator);
        }
    }

    tracing::info!(
        members = indicators.len(),
        "Wired composite subscription health contributor"
    );
    HealthWiring::Composite(CompositeContributor::new(indicators))
}

impl HealthWiring {
    /// Short label for display.
    pub fn kind(&self) -> &'static str {
        match self {
            HealthWiring::NoOp => "no-op",
            HealthWiring::Single(_) => "single",
            HealthWiring::Composite(_) => "composite",
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, HealthWiring::NoOp)
    }

    /// The standalone indicator.
    ///
    /// # Errors
    ///
    /// `WiringError::NoSuchIndicator` unless the outcome is `Single`.
    pub fn indicator(&self) -> Result<&Arc<HealthIndicator>, WiringError> {
        match self {
            HealthWiring::Single(indicator) => Ok(indicator),
            _ => Err(WiringError::NoSuchIndicator),
        }
    }

    /// The composite contributor.
    ///
    /// # Errors
    ///
    /// `WiringError::NoSuchContributor` unless the outcome is `Composite`.
    pub fn composite(&self) -> Result<&CompositeContributor, WiringError> {
        match self {
            HealthWiring::Composite(composite) => Ok(composite),
            _ => Err(WiringError::NoSuchContributor),
        }
    }

    /// Run whatever probes are wired.
    pub async fn check(&self) -> Health {
        match self {
            HealthWiring::NoOp => Health::unknown().with_detail("wiring", "no-op"),
            HealthWiring::Single(indicator) => indicator.check().await,
            HealthWiring::Composite(composite) => composite.check().await,
        }
    }
}
