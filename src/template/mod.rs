//! Messaging template seam.
//!
//! The actual messaging client lives outside this crate; everything here
//! talks to it through [`MessagePuller`]. [`InMemoryTemplate`] is a
//! process-local implementation used by tests and CLI dry runs.

mod memory;

pub use memory::InMemoryTemplate;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// A message pulled from a subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulledMessage {
    /// Server-assigned message id
    pub id: String,
    /// Raw payload bytes
    pub payload: Vec<u8>,
    /// When the message was published
    pub publish_time: DateTime<Utc>,
}

/// Errors surfaced by a template while pulling.
#[derive(Debug, Clone, Error)]
pub enum PullError {
    /// The subscription does not exist on the backend
    #[error("subscription not found: {0}")]
    NotFound(String),

    /// The caller may not read from the subscription
    #[error("permission denied on subscription: {0}")]
    PermissionDenied(String),

    /// The backend could not be reached
    #[error("connection failed: {0}")]
    Connection(String),

    /// The backend answered with an error
    #[error("backend error: {0}")]
    Backend(String),
}

/// Client-side handle for pulling messages from named subscriptions.
///
/// One registered instance per template name; the registry's count of these
/// drives the startup wiring decision.
#[async_trait]
pub trait MessagePuller: Send + Sync {
    /// Pull up to `max_messages` from `subscription`, returning whatever is
    /// immediately available (possibly none).
    async fn pull(
        &self,
        subscription: &str,
        max_messages: u32,
    ) -> Result<Vec<PulledMessage>, PullError>;
}
