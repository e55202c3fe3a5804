// List Use Case

use crate::domain::{MessageQueueTrigger, MessageQueueType};
use crate::error::Result;
use crate::port::TriggerClient;
use tracing::debug;

/// Execute list use case
///
/// An unknown backend identifier is rejected before the remote call.
pub async fn execute(
    client: &dyn TriggerClient,
    mq_type: Option<String>,
) -> Result<Vec<MessageQueueTrigger>> {
    let filter = match super::non_empty(mq_type) {
        Some(raw) => Some(raw.parse::<MessageQueueType>()?),
        None => None,
    };

    let triggers = client.list(filter).await?;
    debug!(count = triggers.len(), filter = ?filter, "Listed message queue triggers");

    Ok(triggers)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::trigger;
    use super::*;
    use crate::domain::DomainError;
    use crate::error::AppError;
    use crate::port::MockTriggerClient;

    #[tokio::test]
    async fn test_list_without_filter() {
        let mut client = MockTriggerClient::new();
        client
            .expect_list()
            .withf(|filter| filter.is_none())
            .times(1)
            .returning(|_| {
                Ok(vec![
                    trigger("t1", "orders", None),
                    trigger("t2", "events", Some("done")),
                ])
            });

        let triggers = execute(&client, None).await.unwrap();
        let names: Vec<&str> = triggers.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["t1", "t2"]);
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let mut client = MockTriggerClient::new();
        client
            .expect_list()
            .withf(|filter| *filter == Some(MessageQueueType::NatsStreaming))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let triggers = execute(&client, Some("nats-streaming".to_string()))
            .await
            .unwrap();
        assert!(triggers.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_filter_fails_before_remote_call() {
        let mut client = MockTriggerClient::new();
        client.expect_list().never();

        let err = execute(&client, Some("kafka".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::UnknownMessageQueueType(_))
        ));
    }
}
