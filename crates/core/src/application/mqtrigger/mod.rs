// Message Queue Trigger Service - Core use cases for trigger management

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::CreateRequest;
pub use update::UpdateRequest;

use crate::domain::MessageQueueTrigger;
use crate::error::Result;
use crate::port::{IdProvider, TriggerClient};
use std::convert::Infallible;
use std::sync::Arc;

/// Message queue trigger service
pub struct TriggerService {
    client: Arc<dyn TriggerClient>,
    id_provider: Arc<dyn IdProvider>,
}

impl TriggerService {
    pub fn new(client: Arc<dyn TriggerClient>, id_provider: Arc<dyn IdProvider>) -> Self {
        Self {
            client,
            id_provider,
        }
    }

    /// Create a trigger, returning its name
    pub async fn create(&self, req: CreateRequest) -> Result<String> {
        create::execute(self.client.as_ref(), self.id_provider.as_ref(), req).await
    }

    /// Look up a single trigger (not supported yet)
    pub async fn get(&self, name: Option<String>) -> Result<Infallible> {
        get::execute(name)
    }

    /// Update the topics of an existing trigger, returning its name
    pub async fn update(&self, req: UpdateRequest) -> Result<String> {
        update::execute(self.client.as_ref(), req).await
    }

    /// Delete a trigger, returning its name
    pub async fn delete(&self, name: Option<String>) -> Result<String> {
        delete::execute(self.client.as_ref(), name).await
    }

    /// List triggers, optionally filtered by backend identifier
    pub async fn list(&self, mq_type: Option<String>) -> Result<Vec<MessageQueueTrigger>> {
        list::execute(self.client.as_ref(), mq_type).await
    }
}

/// Treat empty flag values the same as absent ones
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::{Metadata, MessageQueueTrigger, MessageQueueType};
    use crate::port::IdProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deterministic ids: gen-1, gen-2, ...
    #[derive(Default)]
    pub struct SequenceIdProvider(AtomicUsize);

    impl IdProvider for SequenceIdProvider {
        fn generate_name(&self) -> String {
            format!("gen-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    pub fn trigger(name: &str, topic: &str, response_topic: Option<&str>) -> MessageQueueTrigger {
        MessageQueueTrigger::new(
            name,
            Metadata::named("fn"),
            MessageQueueType::NatsStreaming,
            topic,
            response_topic.map(str::to_string),
        )
    }
}
