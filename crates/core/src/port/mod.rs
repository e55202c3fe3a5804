// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod trigger_client;

// Re-exports
pub use id_provider::{IdProvider, UuidProvider};
pub use trigger_client::TriggerClient;

#[cfg(test)]
pub use trigger_client::MockTriggerClient;
