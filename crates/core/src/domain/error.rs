// Domain Error Types

use super::queue::MessageQueueType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Need {what}, use --{flag}")]
    MissingInput {
        what: &'static str,
        flag: &'static str,
    },

    #[error(
        "Unknown message queue type \"{0}\", currently only \"{}\" is supported",
        MessageQueueType::supported()
    )]
    UnknownMessageQueueType(String),

    #[error("Listen topic cannot be empty")]
    EmptyTopic,

    #[error("Listen topic should not equal to response topic: {0}")]
    TopicCollision(String),

    #[error("Invalid topic for {mq_type}: {topic}")]
    InvalidTopic {
        mq_type: MessageQueueType,
        topic: String,
    },
}

pub type Result<T> = std::result::Result<T, DomainError>;
