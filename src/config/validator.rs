//! # Validator Configuration
//!
//! Process-level settings loaded from environment variables.

/// Validator configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Name of the cluster-scoped Infrastructure object holding the internal API address
    pub infrastructure_name: String,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Enable color in text format logs
    pub log_enable_color: bool,
    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            infrastructure_name: DEFAULT_INFRASTRUCTURE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            log_enable_color: false,
            enable_metrics: true,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        use crate::constants::*;
        Self {
            infrastructure_name: var_or_default_str(
                &lookup,
                "INFRASTRUCTURE_NAME",
                DEFAULT_INFRASTRUCTURE_NAME,
            ),
            log_level: var_or_default_str(&lookup, "LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format: var_or_default_str(&lookup, "LOG_FORMAT", DEFAULT_LOG_FORMAT),
            log_enable_color: var_or_default_bool(&lookup, "LOG_ENABLE_COLOR", false),
            enable_metrics: var_or_default_bool(&lookup, "ENABLE_METRICS", true),
        }
    }

    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Read a variable as boolean or return default
fn var_or_default_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| {
            let v_lower = v.to_lowercase();
            v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
        })
        .unwrap_or(default)
}

/// Read a variable as string or return default
fn var_or_default_str<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
