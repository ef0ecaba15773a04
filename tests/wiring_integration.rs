//! Integration tests for the startup health-wiring decision.
//!
//! Each scenario binds a TOML configuration, registers templates, resolves
//! the wiring once, and asserts which contributors are (and are not)
//! resolvable afterwards.

mod common;

use sentinel::config::SentinelConfig;
use sentinel::health::{resolve, HealthIndicator, HealthWiring, Status, WiringError, WiringInputs};
use sentinel::registry::TemplateRegistry;
use sentinel::template::{InMemoryTemplate, MessagePuller};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Resolve wiring the way startup does: registry built from the config's
/// template declarations.
fn wire(config: &SentinelConfig, user_indicator: Option<Arc<HealthIndicator>>) -> HealthWiring {
    let registry = TemplateRegistry::new();
    for template in &config.pubsub.templates {
        registry
            .register(&template.name, Arc::new(InMemoryTemplate::new()))
            .unwrap();
    }

    resolve(
        WiringInputs {
            pubsub_enabled: config.pubsub.enabled,
            health_check_enabled: config.health_check.enabled,
            user_indicator,
            templates: registry.snapshot(),
        },
        &config.health_check,
    )
}

#[test]
fn test_single_template_wires_standalone_indicator() {
    let config: SentinelConfig = toml::from_str(
        r#"
        [health_check]
        subscription = "probe"
        timeout_millis = 1500

        [[pubsub.templates]]
        name = "default"
        "#,
    )
    .unwrap();

    let wiring = wire(&config, None);

    let indicator = wiring.indicator().expect("standalone indicator wired");
    assert_eq!(indicator.subscription(), "probe");
    assert_eq!(indicator.timeout().as_millis(), 1500);

    // No composite wrapper around a sole template
    assert!(matches!(
        wiring.composite(),
        Err(WiringError::NoSuchContributor)
    ));
}

#[test]
fn test_multiple_templates_wire_composite_keyed_by_name() {
    let config: SentinelConfig = toml::from_str(
        r#"
        [health_check]
        subscription = "probe"

        [[pubsub.templates]]
        name = "orders"

        [[pubsub.templates]]
        name = "billing"
        "#,
    )
    .unwrap();

    let wiring = wire(&config, None);

    // The standalone indicator must not be resolvable
    assert!(matches!(
        wiring.indicator(),
        Err(WiringError::NoSuchIndicator)
    ));

    let composite = wiring.composite().expect("composite wired");
    let expected: BTreeSet<String> = ["orders", "billing"].iter().map(|s| s.to_string()).collect();
    assert_eq!(composite.names(), expected);
    assert_eq!(composite.len(), 2);
}

#[test]
fn test_user_indicator_backs_off_automatic_wiring() {
    let config: SentinelConfig = toml::from_str(
        r#"
        [[pubsub.templates]]
        name = "orders"

        [[pubsub.templates]]
        name = "billing"
        "#,
    )
    .unwrap();

    let user = common::make_indicator("user-probe");
    let wiring = wire(&config, Some(Arc::clone(&user)));

    // Neither composite nor a freshly built indicator; the user's instance
    // is what remains resolvable.
    assert!(wiring.composite().is_err());
    let resolved = wiring.indicator().unwrap();
    assert!(Arc::ptr_eq(resolved, &user));
    assert_eq!(resolved.subscription(), "user-probe");
}

#[test]
fn test_user_indicator_wins_with_single_template_too() {
    let config: SentinelConfig = toml::from_str(
        r#"
        [[pubsub.templates]]
        name = "default"
        "#,
    )
    .unwrap();

    let user = common::make_indicator("user-probe");
    let wiring = wire(&config, Some(Arc::clone(&user)));

    assert!(Arc::ptr_eq(wiring.indicator().unwrap(), &user));
}

#[test]
fn test_pubsub_disabled_wires_nothing() {
    let config: SentinelConfig = toml::from_str(
        r#"
        [pubsub]
        enabled = false

        [health_check]
        enabled = true

        [[pubsub.templates]]
        name = "default"
        "#,
    )
    .unwrap();

    let wiring = wire(&config, None);
    assert!(wiring.is_noop());
    assert!(wiring.indicator().is_err());
    assert!(wiring.composite().is_err());
}

#[test]
fn test_health_check_disabled_wires_nothing() {
    let config: SentinelConfig = toml::from_str(
        r#"
        [health_check]
        enabled = false

        [[pubsub.templates]]
        name = "default"
        "#,
    )
    .unwrap();

    assert!(wire(&config, None).is_noop());
}

#[test]
fn test_no_templates_wires_nothing() {
    let config = SentinelConfig::default();
    assert!(wire(&config, None).is_noop());
}

#[tokio::test]
async fn test_wired_single_indicator_probes_its_template() {
    let template = common::reachable_template("probe");

    let registry = TemplateRegistry::new();
    registry.register("default", template).unwrap();

    let wiring = resolve(
        WiringInputs {
            pubsub_enabled: true,
            health_check_enabled: true,
            user_indicator: None,
            templates: registry.snapshot(),
        },
        &common::probe_config("probe", 1000),
    );

    let health = wiring.check().await;
    assert_eq!(health.status, Status::Up);
    assert_eq!(health.details.get("messages").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn test_wired_composite_probes_every_member() {
    let registry = TemplateRegistry::new();
    registry
        .register("orders", common::reachable_template("probe"))
        .unwrap();
    // Template without the subscription: the not-found answer still counts
    // as reachable.
    registry
        .register("billing", Arc::new(InMemoryTemplate::new()))
        .unwrap();

    let wiring = resolve(
        WiringInputs {
            pubsub_enabled: true,
            health_check_enabled: true,
            user_indicator: None,
            templates: registry.snapshot(),
        },
        &common::probe_config("probe", 1000),
    );

    let composite = wiring.composite().unwrap();
    let results = composite.check_all().await;
    assert_eq!(results.len(), 2);
    assert_eq!(results["orders"].status, Status::Up);
    assert_eq!(results["billing"].status, Status::Up);

    let aggregate = wiring.check().await;
    assert_eq!(aggregate.status, Status::Up);
}

#[test]
fn test_duplicate_template_names_rejected_before_wiring() {
    let registry = TemplateRegistry::new();
    let template: Arc<dyn MessagePuller> = Arc::new(InMemoryTemplate::new());
    registry.register("orders", Arc::clone(&template)).unwrap();

    assert!(registry.register("orders", template).is_err());
    assert_eq!(registry.count(), 1);
}
