// Create Use Case

use super::non_empty;
use crate::domain::{
    check_topic_availability, ensure_distinct_topics, DomainError, Metadata, MessageQueueTrigger,
    MessageQueueType,
};
use crate::error::Result;
use crate::port::{IdProvider, TriggerClient};
use tracing::{debug, info};

/// Create request, straight from the command line flags
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    pub name: Option<String>,
    pub function: Option<String>,
    pub function_uid: Option<String>,
    pub mq_type: Option<String>,
    pub topic: Option<String>,
    pub response_topic: Option<String>,
}

/// Validate the request and assemble the trigger record
///
/// Performs no I/O, so every rejection happens before the remote call.
pub fn build_trigger(
    id_provider: &dyn IdProvider,
    req: CreateRequest,
) -> Result<MessageQueueTrigger> {
    let name = non_empty(req.name).unwrap_or_else(|| id_provider.generate_name());

    let function = non_empty(req.function).ok_or(DomainError::MissingInput {
        what: "a function name to create a trigger",
        flag: "function",
    })?;

    let mq_type = MessageQueueType::resolve(req.mq_type.as_deref())?;

    let topic = non_empty(req.topic).ok_or(DomainError::EmptyTopic)?;
    let response_topic = non_empty(req.response_topic);

    ensure_distinct_topics(&topic, response_topic.as_deref())?;
    check_topic_availability(
        mq_type,
        [Some(topic.as_str()), response_topic.as_deref()]
            .into_iter()
            .flatten(),
    )?;

    debug!(trigger = %name, function = %function, mq_type = %mq_type, "Trigger validated");

    Ok(MessageQueueTrigger::new(
        name,
        Metadata::named(function).with_uid(req.function_uid),
        mq_type,
        topic,
        response_topic,
    ))
}

/// Execute create use case
///
/// # Arguments
///
/// * `client` - Remote trigger API
/// * `id_provider` - Name generator for unnamed triggers (injected for determinism)
/// * `req` - Create request
pub async fn execute(
    client: &dyn TriggerClient,
    id_provider: &dyn IdProvider,
    req: CreateRequest,
) -> Result<String> {
    let trigger = build_trigger(id_provider, req)?;

    info!(
        trigger = %trigger.name(),
        topic = %trigger.topic,
        "Creating message queue trigger"
    );
    client.create(&trigger).await?;

    Ok(trigger.metadata.name)
}
