//! In-memory message template.

use super::{MessagePuller, PullError, PulledMessage};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-local [`MessagePuller`] backed by per-subscription queues.
///
/// Used by tests and by the CLI when it needs template handles without a
/// real messaging client. Pulling from a subscription that was never
/// created fails with [`PullError::NotFound`], matching backend behavior.
pub struct InMemoryTemplate {
    queues: DashMap<String, Vec<PulledMessage>>,
    next_id: AtomicU64,
}

impl InMemoryTemplate {
    pub fn new() -> Self {
        Self {
            queues: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create an empty subscription. Creating one that already exists is a
    /// no-op.
    pub fn create_subscription(&self, name: &str) {
        self.queues.entry(name.to_string()).or_default();
    }

    /// Publish a payload to a subscription, returning the message id.
    pub fn publish(&self, subscription: &str, payload: &[u8]) -> Result<String, PullError> {
        let mut queue = self
            .queues
            .get_mut(subscription)
            .ok_or_else(|| PullError::NotFound(subscription.to_string()))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        queue.push(PulledMessage {
            id: id.clone(),
            payload: payload.to_vec(),
            publish_time: chrono::Utc::now(),
        });
        Ok(id)
    }

    /// Number of messages currently queued on a subscription.
    pub fn queued(&self, subscription: &str) -> usize {
        self.queues.get(subscription).map_or(0, |q| q.len())
    }
}

impl Default for InMemoryTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagePuller for InMemoryTemplate {
    async fn pull(
        &self,
        subscription: &str,
        max_messages: u32,
    ) -> Result<Vec<PulledMessage>, PullError> {
        let mut queue = self
            .queues
            .get_mut(subscription)
            .ok_or_else(|| PullError::NotFound(subscription.to_string()))?;

        let take = (max_messages as usize).min(queue.len());
        Ok(queue.drain(..take).collect())
    }
}
