// Trigger Client Port (Interface)
// The trigger-management service is remote; adapters live in the sdk crate.

use crate::domain::{Metadata, MessageQueueTrigger, MessageQueueType};
use crate::error::Result;
use async_trait::async_trait;

/// Remote trigger-management API
///
/// Implementations:
/// - TriggerApiClient (sdk): REST/JSON over HTTP
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriggerClient: Send + Sync {
    /// Create a trigger, returning the metadata assigned by the server
    async fn create(&self, trigger: &MessageQueueTrigger) -> Result<Metadata>;

    /// Fetch a trigger by reference
    async fn get(&self, reference: &Metadata) -> Result<MessageQueueTrigger>;

    /// Replace an existing trigger
    async fn update(&self, trigger: &MessageQueueTrigger) -> Result<Metadata>;

    /// Delete a trigger by reference
    async fn delete(&self, reference: &Metadata) -> Result<()>;

    /// List triggers, optionally restricted to one backend
    async fn list(&self, mq_type: Option<MessageQueueType>) -> Result<Vec<MessageQueueTrigger>>;
}
