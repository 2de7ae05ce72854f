//! # Observability
//!
//! - `logging`: tracing subscriber setup
//! - `metrics`: Prometheus counters for validation runs and lookups

pub mod logging;
pub mod metrics;

use crate::config::ValidatorConfig;
use anyhow::Result;

pub use logging::init_logging;
pub use metrics::register_metrics;

/// Set up logging and, when enabled, metrics for a process hosting the validator
///
/// Logging failures are tolerated (a host may own the global subscriber);
/// metric registration failures are not.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn init(config: &ValidatorConfig) -> Result<()> {
    if let Err(e) = init_logging(config) {
        tracing::debug!(error = %e, "keeping existing tracing subscriber");
    }
    if config.enable_metrics {
        register_metrics()?;
    }
    Ok(())
}
