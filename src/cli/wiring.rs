//! Wiring command implementation

use crate::cli::WiringArgs;
use crate::config::SentinelConfig;
use crate::health::{resolve, CompositeContributor, WiringInputs};
use crate::registry::TemplateRegistry;
use crate::template::InMemoryTemplate;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::fmt::Write;
use std::sync::Arc;

/// View model for the resolved wiring
#[derive(Debug, Clone, serde::Serialize)]
pub struct WiringView {
    pub wiring: String,
    pub subscription: String,
    pub timeout_millis: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Load configuration with CLI overrides
pub fn load_config(args: &WiringArgs) -> Result<SentinelConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        SentinelConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        SentinelConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn noop_reason(config: &SentinelConfig) -> String {
    if !config.pubsub.enabled {
        "messaging integration disabled".to_string()
    } else if !config.health_check.enabled {
        "health check disabled".to_string()
    } else {
        "no templates configured".to_string()
    }
}

/// Format the resolved wiring as pretty text
fn format_wiring_pretty(view: &WiringView) -> String {
    let mut output = String::new();

    let wiring_display = match view.wiring.as_str() {
        "no-op" => "No-op".yellow(),
        "single" => "Single indicator".green(),
        _ => "Composite contributor".green(),
    };

    writeln!(output, "Wiring: {}", wiring_display).unwrap();
    if let Some(reason) = &view.reason {
        writeln!(output, "Reason: {}", reason).unwrap();
    }
    if let Some(group) = &view.group {
        writeln!(output, "Group: {}", group).unwrap();
    }
    writeln!(output, "Probe subscription: {}", view.subscription).unwrap();
    writeln!(output, "Timeout: {}ms", view.timeout_millis).unwrap();

    if !view.members.is_empty() {
        writeln!(output).unwrap();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Template", "Subscription", "Timeout"]);
        for member in &view.members {
            table.add_row(vec![
                Cell::new(member),
                Cell::new(&view.subscription),
                Cell::new(format!("{}ms", view.timeout_millis)),
            ]);
        }
        writeln!(output, "{}", table).unwrap();
    }

    output
}

/// Handle `sentinel wiring` command
///
/// Dry-runs the startup decision against the configured templates. No
/// backend is contacted; template declarations stand in for live handles.
pub fn handle_wiring(args: &WiringArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(args)?;

    // try_init fails on repeat invocations in one process (tests); keep going.
    let _ = crate::logging::init(&config.logging);

    let registry = TemplateRegistry::new();
    for template in &config.pubsub.templates {
        registry.register(&template.name, Arc::new(InMemoryTemplate::new()))?;
    }

    let wiring = resolve(
        WiringInputs {
            pubsub_enabled: config.pubsub.enabled,
            health_check_enabled: config.health_check.enabled,
            user_indicator: None,
            templates: registry.snapshot(),
        },
        &config.health_check,
    );

    let members = if wiring.is_noop() {
        Vec::new()
    } else {
        registry.names()
    };

    let view = WiringView {
        wiring: wiring.kind().to_string(),
        subscription: config.health_check.subscription.clone(),
        timeout_millis: config.health_check.timeout_millis,
        group: wiring
            .composite()
            .is_ok()
            .then(|| CompositeContributor::GROUP.to_string()),
        members,
        reason: wiring.is_noop().then(|| noop_reason(&config)),
    };

    if args.json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(format_wiring_pretty(&view))
    }
}
