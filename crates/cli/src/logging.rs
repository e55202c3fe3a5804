//! Logging setup
//!
//! Logs go to stderr so stdout only carries command output.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the log format (`json` or `compact`)
pub const LOG_FORMAT_ENV: &str = "TRIGCTL_LOG_FORMAT";

/// Install the global subscriber; fails if one is already installed
pub fn init(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "trigctl=debug" } else { "trigctl=warn" };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_default();
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    }
    .context("Failed to initialise logging")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_reported() {
        init(false).unwrap();

        let err = init(true).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to initialise logging"));
    }
}
