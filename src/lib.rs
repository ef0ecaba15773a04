//! Sentinel - pull-based health probing for cloud messaging subscriptions
//!
//! This library decides at startup how subscription health probing is wired
//! (standalone indicator, composite contributor, or nothing) and provides
//! the configuration binding and probe components that wiring produces.

pub mod cli;
pub mod config;
pub mod health;
pub mod logging;
pub mod registry;
pub mod template;
