//! Command output rendering

use tabled::settings::Style;
use tabled::{Table, Tabled};
use trigctl_core::domain::MessageQueueTrigger;

pub fn created(name: &str) -> String {
    format!("trigger '{}' created", name)
}

pub fn updated(name: &str) -> String {
    format!("trigger '{}' updated", name)
}

pub fn deleted(name: &str) -> String {
    format!("trigger '{}' deleted", name)
}

#[derive(Tabled)]
struct TriggerRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "FUNCTION_NAME")]
    function_name: String,
    #[tabled(rename = "FUNCTION_UID")]
    function_uid: String,
    #[tabled(rename = "MESSAGE_QUEUE_TYPE")]
    message_queue_type: String,
    #[tabled(rename = "TOPIC")]
    topic: String,
    #[tabled(rename = "RESPONSE_TOPIC")]
    response_topic: String,
}

impl From<&MessageQueueTrigger> for TriggerRow {
    fn from(trigger: &MessageQueueTrigger) -> Self {
        Self {
            name: trigger.metadata.name.clone(),
            function_name: trigger.function.name.clone(),
            function_uid: trigger.function.uid.clone().unwrap_or_default(),
            message_queue_type: trigger.message_queue_type.to_string(),
            topic: trigger.topic.clone(),
            response_topic: trigger.response_topic().unwrap_or_default().to_string(),
        }
    }
}

/// Column-aligned table, one row per trigger in the order given
pub fn trigger_table(triggers: &[MessageQueueTrigger]) -> String {
    let mut table = Table::new(triggers.iter().map(TriggerRow::from));
    table.with(Style::blank());
    table.to_string()
}
