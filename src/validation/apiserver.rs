//! # APIServer Validation
//!
//! Runs the SNI and TLS profile checks over one APIServer resource.

use crate::constants::{SPEC_FIELD, TLS_SECURITY_PROFILE_FIELD};
use crate::crd::ApiServer;
use crate::infrastructure::{InfrastructureLookup, LookupError};

use super::field::{ErrorList, FieldPath};
use super::sni::validate_sni_names;
use super::tls_profile::validate_tls_security_profile;

/// Validate the TLS-facing settings of an APIServer
///
/// SNI errors come first, then TLS profile errors under
/// `spec.tlsSecurityProfile`.
///
/// # Errors
///
/// Returns [`LookupError`] when the SNI check cannot read the internal
/// hostname; no partial field errors are returned in that case.
pub async fn validate_apiserver(
    apiserver: &ApiServer,
    lookup: &dyn InfrastructureLookup,
) -> Result<ErrorList, LookupError> {
    let mut errs = validate_sni_names(apiserver, lookup).await?;
    errs.extend(validate_tls_security_profile(
        &FieldPath::new(SPEC_FIELD).child(TLS_SECURITY_PROFILE_FIELD),
        apiserver.spec.tls_security_profile.as_ref(),
    ));
    Ok(errs)
}
