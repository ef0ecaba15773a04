//! Error types for wiring resolution.

use thiserror::Error;

/// Lookup failures against a resolved [`HealthWiring`](super::HealthWiring).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WiringError {
    /// No standalone indicator was wired (the outcome is no-op or composite)
    #[error("no standalone health indicator is wired")]
    NoSuchIndicator,

    /// No composite contributor was wired (the outcome is no-op or single)
    #[error("no composite health contributor is wired")]
    NoSuchContributor,
}
