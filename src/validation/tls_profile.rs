//! # TLS Security Profile Validation
//!
//! Checks that a profile's type tag agrees with its populated sub-structure,
//! and that a custom cipher list names at least one servable cipher.

use crate::crd::{TlsProfileType, TlsSecurityProfile};
use crate::observability::metrics;
use crate::tls::CipherCatalog;
use tracing::debug;

use super::field::{ErrorList, FieldError, FieldPath};

const TYPE_FIELD: &str = "type";
const CIPHERS_FIELD: &str = "ciphers";

/// Validate a TLS security profile located at `field_path`
///
/// An absent profile is valid (the platform default applies). Errors are
/// ordered: type tag, then unset sub-structure, then ciphers.
pub fn validate_tls_security_profile(
    field_path: &FieldPath,
    profile: Option<&TlsSecurityProfile>,
) -> ErrorList {
    let Some(profile) = profile else {
        return ErrorList::new();
    };

    let mut errs = validate_profile_type(field_path, profile);

    if profile.r#type == TlsProfileType::Custom.as_str() {
        if let Some(custom) = &profile.custom {
            errs.extend(validate_cipher_suites(
                &field_path.child(TlsProfileType::Custom.field_name()),
                &custom.spec.ciphers,
            ));
        }
    }

    metrics::record_validation(metrics::CHECK_TLS_PROFILE, &errs);
    if !errs.is_empty() {
        debug!(
            field = %field_path,
            profile_type = %profile.r#type,
            errors = errs.len(),
            "TLS security profile rejected"
        );
    }
    errs
}

fn validate_profile_type(field_path: &FieldPath, profile: &TlsSecurityProfile) -> ErrorList {
    let mut errs = ErrorList::new();

    if profile.r#type.is_empty() {
        if profile.has_any_field() {
            errs.push(FieldError::required(
                field_path.child(TYPE_FIELD),
                "one of the profiles is set but the type field is empty",
            ));
        }
        return errs;
    }

    match profile.profile_type() {
        Some(kind) => {
            if !profile.has_field_for(kind) {
                errs.push(FieldError::required(
                    field_path.child(kind.field_name()),
                    format!("type set to {kind}, but the corresponding field is unset"),
                ));
            }
        }
        None => {
            let valid: Vec<&str> = TlsProfileType::ALL
                .into_iter()
                .map(TlsProfileType::as_str)
                .collect();
            errs.push(FieldError::invalid(
                field_path.child(TYPE_FIELD),
                profile.r#type.as_str(),
                format!("unknown type, valid values are: [{}]", valid.join(" ")),
            ));
        }
    }
    errs
}

/// An empty list is left alone; a non-empty list must contain at least one
/// cipher from the catalog. Unknown extras are tolerated.
fn validate_cipher_suites(custom_path: &FieldPath, ciphers: &[String]) -> ErrorList {
    let mut errs = ErrorList::new();
    if ciphers.is_empty() {
        return errs;
    }

    let (supported, unsupported) = CipherCatalog::global().partition(ciphers);
    if supported.is_empty() {
        errs.push(FieldError::invalid(
            custom_path.child(CIPHERS_FIELD),
            ciphers,
            "no supported cipher suite found",
        ));
    } else if !unsupported.is_empty() {
        debug!(
            ignored = ?unsupported,
            "custom TLS profile lists ciphers outside the catalog"
        );
    }
    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{CustomTlsProfile, OldTlsProfile, TlsProfileSpec};

    fn root() -> FieldPath {
        FieldPath::new("testSpec")
    }

    #[test]
    fn test_empty_type_with_field_set() {
        let profile = TlsSecurityProfile {
            old: Some(OldTlsProfile {}),
            ..TlsSecurityProfile::default()
        };
        let errs = validate_tls_security_profile(&root(), Some(&profile));
        assert_eq!(errs.len(), 1);
        assert_eq!(
            errs[0].to_string(),
            "testSpec.type: Required value: one of the profiles is set but the type field is empty"
        );
    }

    #[test]
    fn test_custom_type_without_custom_field() {
        let profile = TlsSecurityProfile {
            r#type: "Custom".to_string(),
            ..TlsSecurityProfile::default()
        };
        let errs = validate_tls_security_profile(&root(), Some(&profile));
        assert_eq!(
            errs,
            vec![FieldError::required(
                root().child("custom"),
                "type set to Custom, but the corresponding field is unset"
            )]
        );
    }

    #[test]
    fn test_ciphers_ignored_for_non_custom_type() {
        // A stray custom block under a preset type is not cipher-checked
        let profile = TlsSecurityProfile {
            r#type: "Old".to_string(),
            old: Some(OldTlsProfile {}),
            custom: Some(CustomTlsProfile {
                spec: TlsProfileSpec {
                    ciphers: vec!["UNKNOWN_CIPHER".to_string()],
                    ..TlsProfileSpec::default()
                },
            }),
            ..TlsSecurityProfile::default()
        };
        assert!(validate_tls_security_profile(&root(), Some(&profile)).is_empty());
    }

    #[test]
    fn test_all_unknown_ciphers_reported_once_with_full_list() {
        let ciphers = vec!["NOPE".to_string(), "ALSO-NOPE".to_string()];
        let errs = validate_cipher_suites(&root().child("custom"), &ciphers);
        assert_eq!(
            errs,
            vec![FieldError::invalid(
                root().children(&["custom", "ciphers"]),
                ciphers.as_slice(),
                "no supported cipher suite found"
            )]
        );
    }
}
