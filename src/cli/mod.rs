//! CLI module for Sentinel
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `wiring` - Show the health wiring the current configuration resolves to
//! - `config` - Configuration utilities (init, validate)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Dry-run the startup wiring decision
//! sentinel wiring -c sentinel.toml
//!
//! # Scaffold a configuration file
//! sentinel config init
//! ```

pub mod completions;
pub mod config;
pub mod wiring;

pub use completions::handle_completions;
pub use config::{handle_config_init, handle_config_validate};
pub use wiring::handle_wiring;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sentinel - subscription health probe wiring
#[derive(Parser, Debug)]
#[command(
    name = "sentinel",
    version,
    about = "Pull-based health probing for cloud messaging subscriptions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved health wiring
    Wiring(WiringArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct WiringArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "sentinel.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SENTINEL_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
    /// Validate a configuration file
    Validate(ConfigValidateArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "sentinel.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigValidateArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "sentinel.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
