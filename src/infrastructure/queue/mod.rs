pub mod rabbitmq;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("queue error: {0}")]
    Publish(String),
}

/// Durable-queue seam. Delivery is at-least-once with no ordering
/// guarantee; the returned message id is a correlation token for the
/// caller, not a dedup key.
#[async_trait]
pub trait JobQueue: Send + Sync {
    async fn send(&self, body: &[u8]) -> Result<String, QueueError>;
}
