// Topic Naming Rules (per message queue backend)

use super::error::{DomainError, Result};
use super::queue::MessageQueueType;

/// Maximum subject length accepted by NATS Streaming, in bytes
pub const MAX_NATS_SUBJECT_LEN: usize = 255;

/// Check a topic name against the naming rules of the given backend
pub fn is_topic_valid(mq_type: MessageQueueType, topic: &str) -> bool {
    match mq_type {
        MessageQueueType::NatsStreaming => is_nats_subject_valid(topic),
    }
}

/// NATS Streaming subjects: dot separated tokens of `[A-Za-z0-9_-]`.
///
/// Wildcards (`*`, `>`) and whitespace are rejected, as are empty tokens
/// (leading, trailing or doubled dots).
fn is_nats_subject_valid(subject: &str) -> bool {
    if subject.is_empty() || subject.len() > MAX_NATS_SUBJECT_LEN {
        return false;
    }

    subject.split('.').all(|token| {
        !token.is_empty()
            && token
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
    })
}

/// Validate every non-empty topic, stopping at the first invalid one
pub fn check_topic_availability<'a>(
    mq_type: MessageQueueType,
    topics: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    for topic in topics {
        if !topic.is_empty() && !is_topic_valid(mq_type, topic) {
            return Err(DomainError::InvalidTopic {
                mq_type,
                topic: topic.to_string(),
            });
        }
    }
    Ok(())
}

/// A trigger must not publish its results back onto the topic it listens on
pub fn ensure_distinct_topics(topic: &str, response_topic: Option<&str>) -> Result<()> {
    match response_topic {
        Some(response) if response == topic => Err(DomainError::TopicCollision(topic.to_string())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATS: MessageQueueType = MessageQueueType::NatsStreaming;

    #[test]
    fn test_valid_nats_subjects() {
        for subject in ["orders", "orders.created", "a-b_c.D9", "x"] {
            assert!(is_topic_valid(NATS, subject), "{subject} should be valid");
        }
    }

    #[test]
    fn test_invalid_nats_subjects() {
        for subject in [
            "",
            "orders.*",
            "orders.>",
            "two words",
            "tab\tseparated",
            ".leading",
            "trailing.",
            "double..dot",
            "ünïcode",
            "slash/topic",
        ] {
            assert!(!is_topic_valid(NATS, subject), "{subject:?} should be invalid");
        }
    }

    #[test]
    fn test_nats_subject_length_limit() {
        assert!(is_topic_valid(NATS, &"a".repeat(MAX_NATS_SUBJECT_LEN)));
        assert!(!is_topic_valid(NATS, &"a".repeat(MAX_NATS_SUBJECT_LEN + 1)));
    }

    #[test]
    fn test_check_skips_empty_topics() {
        assert!(check_topic_availability(NATS, ["orders", ""]).is_ok());
    }

    #[test]
    fn test_check_reports_first_invalid_topic() {
        let err = check_topic_availability(NATS, ["orders", "bad topic", "also*bad"]).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTopic {
                mq_type: NATS,
                topic: "bad topic".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Invalid topic for nats-streaming: bad topic");
    }

    #[test]
    fn test_distinct_topics() {
        assert!(ensure_distinct_topics("orders", None).is_ok());
        assert!(ensure_distinct_topics("orders", Some("done")).is_ok());
        assert_eq!(
            ensure_distinct_topics("orders", Some("orders")).unwrap_err(),
            DomainError::TopicCollision("orders".to_string())
        );
    }
}
