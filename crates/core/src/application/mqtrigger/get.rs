// Get Use Case

use crate::error::{AppError, Result};
use std::convert::Infallible;
use tracing::debug;

/// Single-trigger lookup is not offered by this command set yet.
///
/// Always fails; there is no success value to return.
pub fn execute(name: Option<String>) -> Result<Infallible> {
    debug!(trigger = ?name, "Get requested for message queue trigger");
    Err(AppError::NotImplemented(
        "getting a single message queue trigger; use `mqtrigger list`".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_not_implemented() {
        let err = execute(Some("t1".to_string())).unwrap_err();
        assert!(matches!(err, AppError::NotImplemented(_)));
    }
}
