//! # Logging
//!
//! Installs the process-wide `tracing` subscriber.

use crate::config::ValidatorConfig;
use anyhow::{anyhow, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level for this crate
pub fn env_filter(config: &ValidatorConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "apiserver_tls_validator={}",
            config.log_level.to_lowercase()
        ))
    })
}

/// Install a fmt subscriber (json or text) as the global default
///
/// Fails when another global subscriber is already installed, which an
/// embedding admission server may well have done; callers can ignore that.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn init_logging(config: &ValidatorConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(config.log_enable_color);

    let installed = if config.json_logs() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    info!(
        git_hash = env!("BUILD_GIT_HASH"),
        build_time = env!("BUILD_DATETIME"),
        log_format = %config.log_format,
        "apiserver TLS validator logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_configured_level() {
        let config = ValidatorConfig {
            log_level: "DEBUG".to_string(),
            ..ValidatorConfig::default()
        };
        // RUST_LOG is not set by the test harness
        if std::env::var("RUST_LOG").is_err() {
            assert_eq!(
                env_filter(&config).to_string(),
                "apiserver_tls_validator=debug"
            );
        }
    }

    #[test]
    fn test_second_init_fails() {
        let config = ValidatorConfig {
            log_format: "text".to_string(),
            ..ValidatorConfig::default()
        };
        // First call may lose to another test that installed a subscriber
        let _first = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
