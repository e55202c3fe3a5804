// Delete Use Case

use super::non_empty;
use crate::domain::{DomainError, Metadata};
use crate::error::Result;
use crate::port::TriggerClient;
use tracing::info;

/// Execute delete use case
pub async fn execute(client: &dyn TriggerClient, name: Option<String>) -> Result<String> {
    let name = non_empty(name).ok_or(DomainError::MissingInput {
        what: "name of trigger to delete",
        flag: "name",
    })?;

    info!(trigger = %name, "Deleting message queue trigger");
    client.delete(&Metadata::named(name.as_str())).await?;

    Ok(name)
}
