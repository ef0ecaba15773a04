//! Messaging integration configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the messaging integration as a whole.
///
/// `enabled = false` switches the integration off globally; probe wiring
/// backs off entirely in that case, independent of the probe's own flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PubSubConfig {
    pub enabled: bool,
    /// Project the templates bind to unless overridden per template
    pub project_id: String,
    /// Optional service endpoint override (e.g. an emulator address)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Named template declarations
    pub templates: Vec<TemplateConfig>,
}

impl Default for PubSubConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            project_id: String::new(),
            endpoint: None,
            templates: Vec::new(),
        }
    }
}

/// A single named messaging-template declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Registration name; drives the composite member name when several
    /// templates exist
    pub name: String,
    /// Per-template project override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}
