//! # SNI Name Validation
//!
//! Serving certificates selected by SNI may not claim the reserved internal
//! load-balancer hostname, either literally or through a trailing wildcard.

use crate::constants::{NAMES_FIELD, SERVING_CERTS_FIELD, SPEC_FIELD, WILDCARD_SUFFIX};
use crate::crd::{ApiServer, ApiServerSpec};
use crate::infrastructure::{InfrastructureLookup, LookupError};
use crate::observability::metrics;
use tracing::{debug, info, warn};

use super::field::{ErrorList, FieldError, FieldPath};

/// Whether an SNI pattern would select `hostname`
///
/// Exact match, or a pattern ending in `.*` whose prefix (up to and including
/// the dot) starts `hostname`. No other wildcard forms are recognized.
pub fn sni_pattern_matches(pattern: &str, hostname: &str) -> bool {
    if pattern == hostname {
        return true;
    }
    pattern.strip_suffix(WILDCARD_SUFFIX).is_some_and(|stem| {
        hostname
            .strip_prefix(stem)
            .is_some_and(|rest| rest.starts_with('.'))
    })
}

/// Report every SNI pattern of `spec` that collides with `internal_hostname`
///
/// Errors follow certificate order, then pattern order.
pub fn sni_conflicts(spec: &ApiServerSpec, internal_hostname: &str) -> ErrorList {
    let certs_path = FieldPath::new(SPEC_FIELD).child(SERVING_CERTS_FIELD);
    let mut errs = ErrorList::new();

    for (i, cert) in spec.named_certificates() {
        let names_path = certs_path.index(i).child(NAMES_FIELD);
        for (j, name) in cert.names.iter().enumerate() {
            if sni_pattern_matches(name, internal_hostname) {
                errs.push(FieldError::invalid(
                    names_path.index(j),
                    name.as_str(),
                    format!("may not match internal loadbalancer: {internal_hostname:?}"),
                ));
            }
        }
    }
    errs
}

/// Validate the serving certificate SNI names of an APIServer
///
/// Reads the internal hostname through `lookup` once per call. Without named
/// certificates there is nothing to collide, and no lookup happens. A failed
/// lookup aborts validation: no field errors are returned alongside it.
///
/// # Errors
///
/// Returns [`LookupError`] when the internal hostname cannot be determined.
pub async fn validate_sni_names(
    apiserver: &ApiServer,
    lookup: &dyn InfrastructureLookup,
) -> Result<ErrorList, LookupError> {
    let spec = &apiserver.spec;
    if spec.serving_certs.named_certificates.is_empty() {
        metrics::record_validation(metrics::CHECK_SNI, &[]);
        return Ok(ErrorList::new());
    }

    let internal_hostname = match lookup.internal_hostname().await {
        Ok(hostname) => hostname,
        Err(e) => {
            metrics::increment_lookup_failures();
            warn!(
                infrastructure = lookup.name(),
                transient = e.is_transient(),
                error = %e,
                "cannot validate SNI names without the internal hostname"
            );
            return Err(e);
        }
    };
    debug!(internal_hostname = %internal_hostname, "resolved internal API hostname");

    let errs = sni_conflicts(spec, &internal_hostname);
    metrics::record_validation(metrics::CHECK_SNI, &errs);
    if !errs.is_empty() {
        info!(
            conflicts = errs.len(),
            internal_hostname = %internal_hostname,
            "serving certificate names collide with the internal load balancer"
        );
    }
    Ok(errs)
}
