//! Wire helpers for the REST endpoints

use serde::Serialize;
use trigctl_core::domain::MessageQueueType;

/// Path segments of the trigger collection, relative to the server URL
pub(crate) const TRIGGER_COLLECTION: [&str; 3] = ["v1", "triggers", "messagequeue"];

/// `?uid=` on single-trigger endpoints
#[derive(Debug, Serialize)]
pub(crate) struct ReferenceQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<&'a str>,
}

/// `?mqtype=` on the collection endpoint
#[derive(Debug, Serialize)]
pub(crate) struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mqtype: Option<MessageQueueType>,
}
