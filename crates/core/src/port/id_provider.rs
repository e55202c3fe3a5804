// Name Provider Port
// Unnamed triggers get a generated name; tests inject a deterministic one.

/// Trigger name generator
pub trait IdProvider: Send + Sync {
    /// A fresh, non-empty name that does not repeat across calls
    fn generate_name(&self) -> String;
}

/// Random UUID v4 names (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_name(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_names_are_unique_and_non_empty() {
        let provider = UuidProvider;
        let names: HashSet<String> = (0..100).map(|_| provider.generate_name()).collect();

        assert_eq!(names.len(), 100);
        assert!(names.iter().all(|name| name.len() == 36));
    }
}
