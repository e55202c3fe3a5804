// Message Queue Backend Model

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Message queue backend a trigger listens on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageQueueType {
    #[default]
    #[serde(rename = "nats-streaming")]
    NatsStreaming,
}

impl MessageQueueType {
    pub const NATS_STREAMING: &'static str = "nats-streaming";

    /// Every recognised backend
    pub const ALL: &'static [MessageQueueType] = &[MessageQueueType::NatsStreaming];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageQueueType::NatsStreaming => Self::NATS_STREAMING,
        }
    }

    /// Supported identifiers, joined for quoting in error messages
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(MessageQueueType::as_str)
            .collect::<Vec<_>>()
            .join("\", \"")
    }

    /// Resolve a user supplied identifier; unset or empty selects the default backend.
    /// Anything else must match an identifier exactly.
    pub fn resolve(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for MessageQueueType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mq_type| mq_type.as_str() == s)
            .ok_or_else(|| DomainError::UnknownMessageQueueType(s.to_string()))
    }
}

impl std::fmt::Display for MessageQueueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
