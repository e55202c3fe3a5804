// Update Use Case

use super::non_empty;
use crate::domain::{check_topic_availability, ensure_distinct_topics, DomainError, Metadata};
use crate::error::Result;
use crate::port::TriggerClient;
use tracing::info;

/// Update request
///
/// `topic: None` keeps the current listen topic. The response topic is
/// always replaced: `None` or `Some("")` leaves the trigger without one.
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    pub name: Option<String>,
    pub topic: Option<String>,
    pub response_topic: Option<String>,
}

/// Execute update use case: fetch, overwrite topics, re-validate, replace
pub async fn execute(client: &dyn TriggerClient, req: UpdateRequest) -> Result<String> {
    let name = non_empty(req.name).ok_or(DomainError::MissingInput {
        what: "name of trigger",
        flag: "name",
    })?;

    let mut trigger = client.get(&Metadata::named(name.as_str())).await?;

    if let Some(topic) = non_empty(req.topic) {
        trigger.topic = topic;
    }
    trigger.response_topic = non_empty(req.response_topic);

    if trigger.topic.is_empty() {
        return Err(DomainError::EmptyTopic.into());
    }
    ensure_distinct_topics(&trigger.topic, trigger.response_topic())?;
    check_topic_availability(
        trigger.message_queue_type,
        [Some(trigger.topic.as_str()), trigger.response_topic()]
            .into_iter()
            .flatten(),
    )?;

    info!(trigger = %name, topic = %trigger.topic, "Updating message queue trigger");
    client.update(&trigger).await?;

    Ok(name)
}
