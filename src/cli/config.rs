//! Config command handlers

use crate::cli::{ConfigInitArgs, ConfigValidateArgs};
use crate::config::SentinelConfig;
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../sentinel.example.toml");

/// Handle `sentinel config init` command
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Check if file exists
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    fs::write(&args.output, EXAMPLE_CONFIG)?;

    println!("✓ Configuration file created: {}", args.output.display());
    println!("  Edit this file to declare your templates and probe subscription.");

    Ok(())
}

/// Handle `sentinel config validate` command
pub fn handle_config_validate(
    args: &ConfigValidateArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = SentinelConfig::load(Some(&args.config))?;
    config.validate()?;

    Ok(format!(
        "✓ {} is valid ({} template{})",
        args.config.display(),
        config.pubsub.templates.len(),
        if config.pubsub.templates.len() == 1 {
            ""
        } else {
            "s"
        }
    ))
}
