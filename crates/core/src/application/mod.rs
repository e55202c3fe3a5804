// Application Layer - Use Cases and Business Logic

pub mod mqtrigger;

// Re-exports
pub use mqtrigger::TriggerService;
