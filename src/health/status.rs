//! Probe status types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reported status of a probed dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The backend answered the probe
    Up,
    /// The probe failed with an unexpected error
    Down,
    /// The probe produced no answer within the timeout
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Up => write!(f, "up"),
            Status::Down => write!(f, "down"),
            Status::Unknown => write!(f, "unknown"),
        }
    }
}

/// Outcome of one probe: a status plus free-form string details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: Status,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl Health {
    pub fn up() -> Self {
        Self::with_status(Status::Up)
    }

    pub fn down() -> Self {
        Self::with_status(Status::Down)
    }

    pub fn unknown() -> Self {
        Self::with_status(Status::Unknown)
    }

    fn with_status(status: Status) -> Self {
        Self {
            status,
            details: BTreeMap::new(),
        }
    }

    /// Attach a detail entry, builder style.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}
