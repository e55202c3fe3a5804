//! Trigger API Client Implementation

use crate::config::ClientConfig;
use crate::error::{Result, SdkError};
use crate::types::{ListQuery, ReferenceQuery, TRIGGER_COLLECTION};
use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use tracing::debug;
use trigctl_core::domain::{Metadata, MessageQueueTrigger, MessageQueueType};
use trigctl_core::port::TriggerClient;

/// Message queue trigger API client
///
/// Talks REST/JSON to `<server>/v1/triggers/messagequeue`.
///
/// # Example
///
/// ```no_run
/// use trigctl_sdk::TriggerApiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TriggerApiClient::connect("http://127.0.0.1:8888")?;
/// client.delete_trigger(&trigctl_core::domain::Metadata::named("t1")).await?;
/// # Ok(())
/// # }
/// ```
pub struct TriggerApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TriggerApiClient {
    /// Build a client from explicit settings
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SdkError::InvalidUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Build a client for `url` with default settings
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        Self::new(ClientConfig::new(url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Collection URL, or the URL of one trigger when `name` is given
    fn trigger_url(&self, name: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // cannot-be-a-base URLs are rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(TRIGGER_COLLECTION);
            if let Some(name) = name {
                segments.push(name);
            }
        }
        url
    }

    /// POST a new trigger
    pub async fn create_trigger(&self, trigger: &MessageQueueTrigger) -> Result<Metadata> {
        let url = self.trigger_url(None);
        debug!(%url, trigger = %trigger.name(), "Creating trigger");

        let response = self.http.post(url).json(trigger).send().await?;
        let response = check_status(response, &describe(trigger.name())).await?;
        Ok(response.json().await?)
    }

    /// GET one trigger
    pub async fn get_trigger(&self, reference: &Metadata) -> Result<MessageQueueTrigger> {
        let url = self.trigger_url(Some(&reference.name));
        debug!(%url, "Fetching trigger");

        let response = self
            .http
            .get(url)
            .query(&ReferenceQuery {
                uid: reference.uid.as_deref(),
            })
            .send()
            .await?;
        let response = check_status(response, &describe(&reference.name)).await?;
        Ok(response.json().await?)
    }

    /// PUT a full replacement of an existing trigger
    pub async fn update_trigger(&self, trigger: &MessageQueueTrigger) -> Result<Metadata> {
        let url = self.trigger_url(Some(trigger.name()));
        debug!(%url, "Updating trigger");

        let response = self.http.put(url).json(trigger).send().await?;
        let response = check_status(response, &describe(trigger.name())).await?;
        Ok(response.json().await?)
    }

    /// DELETE one trigger
    pub async fn delete_trigger(&self, reference: &Metadata) -> Result<()> {
        let url = self.trigger_url(Some(&reference.name));
        debug!(%url, "Deleting trigger");

        let response = self
            .http
            .delete(url)
            .query(&ReferenceQuery {
                uid: reference.uid.as_deref(),
            })
            .send()
            .await?;
        check_status(response, &describe(&reference.name)).await?;
        Ok(())
    }

    /// GET the trigger collection
    pub async fn list_triggers(
        &self,
        mq_type: Option<MessageQueueType>,
    ) -> Result<Vec<MessageQueueTrigger>> {
        let url = self.trigger_url(None);
        debug!(%url, filter = ?mq_type, "Listing triggers");

        let response = self
            .http
            .get(url)
            .query(&ListQuery { mqtype: mq_type })
            .send()
            .await?;
        let response = check_status(response, "message queue triggers").await?;
        Ok(response.json().await?)
    }
}

fn describe(name: &str) -> String {
    format!("message queue trigger '{}'", name)
}

/// Map non-2xx responses to errors, keeping the server's message
async fn check_status(response: Response, resource: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match body.trim() {
        "" => status.canonical_reason().unwrap_or("unknown error").to_string(),
        text => text.to_string(),
    };

    if status == StatusCode::NOT_FOUND {
        return Err(SdkError::NotFound(format!("{}: {}", resource, message)));
    }

    Err(SdkError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TriggerClient for TriggerApiClient {
    async fn create(&self, trigger: &MessageQueueTrigger) -> trigctl_core::Result<Metadata> {
        Ok(self.create_trigger(trigger).await?)
    }

    async fn get(&self, reference: &Metadata) -> trigctl_core::Result<MessageQueueTrigger> {
        Ok(self.get_trigger(reference).await?)
    }

    async fn update(&self, trigger: &MessageQueueTrigger) -> trigctl_core::Result<Metadata> {
        Ok(self.update_trigger(trigger).await?)
    }

    async fn delete(&self, reference: &Metadata) -> trigctl_core::Result<()> {
        Ok(self.delete_trigger(reference).await?)
    }

    async fn list(
        &self,
        mq_type: Option<MessageQueueType>,
    ) -> trigctl_core::Result<Vec<MessageQueueTrigger>> {
        Ok(self.list_triggers(mq_type).await?)
    }
}
