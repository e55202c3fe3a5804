// Message Queue Trigger Domain Model

use super::queue::MessageQueueType;
use serde::{Deserialize, Serialize};

/// Reference to a remote resource (trigger or function)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

impl Metadata {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uid: None,
        }
    }

    pub fn with_uid(mut self, uid: Option<String>) -> Self {
        self.uid = uid.filter(|uid| !uid.is_empty());
        self
    }
}

/// Binding from a message queue topic to a function invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageQueueTrigger {
    pub metadata: Metadata,
    pub function: Metadata,
    pub message_queue_type: MessageQueueType,
    pub topic: String,

    #[serde(
        rename = "respTopic",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub response_topic: Option<String>,
}

impl MessageQueueTrigger {
    pub fn new(
        name: impl Into<String>,
        function: Metadata,
        message_queue_type: MessageQueueType,
        topic: impl Into<String>,
        response_topic: Option<String>,
    ) -> Self {
        Self {
            metadata: Metadata::named(name),
            function,
            message_queue_type,
            topic: topic.into(),
            response_topic: response_topic.filter(|t| !t.is_empty()),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Response topic, treating an empty string as unset
    pub fn response_topic(&self) -> Option<&str> {
        self.response_topic.as_deref().filter(|t| !t.is_empty())
    }
}
