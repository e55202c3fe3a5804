// Domain Layer - Pure business logic and entities

pub mod error;
pub mod queue;
pub mod topic;
pub mod trigger;

// Re-exports
pub use error::DomainError;
pub use queue::MessageQueueType;
pub use topic::{check_topic_availability, ensure_distinct_topics, is_topic_valid};
pub use trigger::{Metadata, MessageQueueTrigger};
