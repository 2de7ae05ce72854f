//! # Metrics
//!
//! Prometheus metrics for the validator.
//!
//! ## Metrics Exposed
//!
//! - `apiserver_tls_validations_total{check}` - Validation runs per check
//! - `apiserver_tls_field_errors_total{check, kind}` - Field errors reported per check and error kind
//! - `apiserver_tls_infrastructure_lookup_failures_total` - Failed infrastructure lookups
//! - `apiserver_tls_infrastructure_lookup_duration_seconds` - Duration of infrastructure lookups
//!
//! Metrics live in [`REGISTRY`]; the embedding process decides how to expose it.

use crate::validation::FieldError;
use anyhow::Result;
use prometheus::{Histogram, IntCounter, IntCounterVec, Registry};
use std::sync::LazyLock;

/// Check label for SNI validation
pub const CHECK_SNI: &str = "sni";
/// Check label for TLS profile validation
pub const CHECK_TLS_PROFILE: &str = "tls_profile";

pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static VALIDATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "apiserver_tls_validations_total",
            "Total number of validation runs by check",
        ),
        &["check"],
    )
    .expect("Failed to create VALIDATIONS_TOTAL metric - this should never happen")
});

static FIELD_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "apiserver_tls_field_errors_total",
            "Total number of field errors reported by check and kind",
        ),
        &["check", "kind"],
    )
    .expect("Failed to create FIELD_ERRORS_TOTAL metric - this should never happen")
});

static LOOKUP_FAILURES_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "apiserver_tls_infrastructure_lookup_failures_total",
        "Total number of failed infrastructure lookups",
    )
    .expect("Failed to create LOOKUP_FAILURES_TOTAL metric - this should never happen")
});

static LOOKUP_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "apiserver_tls_infrastructure_lookup_duration_seconds",
            "Duration of infrastructure lookups in seconds",
        )
        .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
    )
    .expect("Failed to create LOOKUP_DURATION metric - this should never happen")
});

/// Register all metrics with [`REGISTRY`]
///
/// Fails if called more than once.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(VALIDATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(FIELD_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(LOOKUP_FAILURES_TOTAL.clone()))?;
    REGISTRY.register(Box::new(LOOKUP_DURATION.clone()))?;

    Ok(())
}

pub fn record_validation(check: &str, errs: &[FieldError]) {
    VALIDATIONS_TOTAL.with_label_values(&[check]).inc();
    for err in errs {
        FIELD_ERRORS_TOTAL
            .with_label_values(&[check, err.kind()])
            .inc();
    }
}

pub fn increment_lookup_failures() {
    LOOKUP_FAILURES_TOTAL.inc();
}

pub fn observe_lookup_duration(duration: f64) {
    LOOKUP_DURATION.observe(duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_metrics() {
        // This should not panic - metrics should register successfully
        assert!(register_metrics().is_ok());
    }

    #[test]
    fn test_record_validation_counts_runs_and_errors_by_kind() {
        use crate::validation::FieldPath;

        let invalid = || FIELD_ERRORS_TOTAL.with_label_values(&["test_check", "FieldValueInvalid"]);
        let required = || FIELD_ERRORS_TOTAL.with_label_values(&["test_check", "FieldValueRequired"]);
        let runs_before = VALIDATIONS_TOTAL.with_label_values(&["test_check"]).get();
        let invalid_before = invalid().get();
        let required_before = required().get();

        let errs = vec![
            FieldError::invalid(FieldPath::new("p").child("type"), "x", "unknown type"),
            FieldError::invalid(FieldPath::new("p").child("type"), "y", "unknown type"),
            FieldError::required(FieldPath::new("p").child("old"), "must be set"),
        ];
        record_validation("test_check", &errs);
        record_validation("test_check", &[]);

        assert_eq!(
            VALIDATIONS_TOTAL.with_label_values(&["test_check"]).get(),
            runs_before + 2
        );
        assert_eq!(invalid().get(), invalid_before + 2);
        assert_eq!(required().get(), required_before + 1);
    }

    #[test]
    fn test_increment_lookup_failures() {
        let before = LOOKUP_FAILURES_TOTAL.get();
        increment_lookup_failures();
        assert!(LOOKUP_FAILURES_TOTAL.get() > before);
    }

    #[test]
    fn test_observe_lookup_duration() {
        let before = LOOKUP_DURATION.get_sample_count();
        observe_lookup_duration(0.02);
        assert!(LOOKUP_DURATION.get_sample_count() > before);
    }
}
