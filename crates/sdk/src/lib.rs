//! trigctl SDK - Rust Client Library
//!
//! HTTP adapter for the message queue trigger API. Implements the
//! `TriggerClient` port from `trigctl-core`.
//!
//! # Example
//!
//! ```no_run
//! use trigctl_sdk::{ClientConfig, TriggerApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TriggerApiClient::new(ClientConfig::new("http://127.0.0.1:8888"))?;
//!
//!     for trigger in client.list_triggers(None).await? {
//!         println!("{} -> {}", trigger.topic, trigger.function.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::TriggerApiClient;
pub use config::{ClientConfig, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT, SERVER_URL_ENV, TIMEOUT_ENV};
pub use error::{Result, SdkError};
