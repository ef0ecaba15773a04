//! Error types for the template registry.

use thiserror::Error;

/// Errors returned by [`TemplateRegistry`](super::TemplateRegistry) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A template with the same name is already registered
    #[error("template already registered: {0}")]
    DuplicateTemplate(String),

    /// No template registered under the given name
    #[error("template not found: {0}")]
    TemplateNotFound(String),
}
