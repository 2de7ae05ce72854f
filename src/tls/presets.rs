//! # Predefined Profiles
//!
//! Cipher lists and minimum versions behind the Old, Intermediate and Modern
//! profile kinds. Names are OpenSSL-style; some (the DHE suites) are listed for
//! parity with the published profiles even though the catalog cannot serve them.

use crate::crd::{TlsProfile, TlsProfileSpec, TlsProfileType, TlsProtocolVersion, TlsSecurityProfile};

const MODERN_CIPHERS: &[&str] = &[
    "TLS_AES_128_GCM_SHA256",
    "TLS_AES_256_GCM_SHA384",
    "TLS_CHACHA20_POLY1305_SHA256",
];

const INTERMEDIATE_CIPHERS: &[&str] = &[
    "TLS_AES_128_GCM_SHA256",
    "TLS_AES_256_GCM_SHA384",
    "TLS_CHACHA20_POLY1305_SHA256",
    "ECDHE-ECDSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES128-GCM-SHA256",
    "ECDHE-ECDSA-AES256-GCM-SHA384",
    "ECDHE-RSA-AES256-GCM-SHA384",
    "ECDHE-ECDSA-CHACHA20-POLY1305",
    "ECDHE-RSA-CHACHA20-POLY1305",
    "DHE-RSA-AES128-GCM-SHA256",
    "DHE-RSA-AES256-GCM-SHA384",
];

const OLD_CIPHERS: &[&str] = &[
    "TLS_AES_128_GCM_SHA256",
    "TLS_AES_256_GCM_SHA384",
    "TLS_CHACHA20_POLY1305_SHA256",
    "ECDHE-ECDSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES128-GCM-SHA256",
    "ECDHE-ECDSA-AES256-GCM-SHA384",
    "ECDHE-RSA-AES256-GCM-SHA384",
    "ECDHE-ECDSA-CHACHA20-POLY1305",
    "ECDHE-RSA-CHACHA20-POLY1305",
    "DHE-RSA-AES128-GCM-SHA256",
    "DHE-RSA-AES256-GCM-SHA384",
    "DHE-RSA-CHACHA20-POLY1305",
    "ECDHE-ECDSA-AES128-SHA256",
    "ECDHE-RSA-AES128-SHA256",
    "ECDHE-ECDSA-AES128-SHA",
    "ECDHE-RSA-AES128-SHA",
    "ECDHE-ECDSA-AES256-SHA384",
    "ECDHE-RSA-AES256-SHA384",
    "ECDHE-ECDSA-AES256-SHA",
    "ECDHE-RSA-AES256-SHA",
    "DHE-RSA-AES128-SHA256",
    "DHE-RSA-AES256-SHA256",
    "AES128-GCM-SHA256",
    "AES256-GCM-SHA384",
    "AES128-SHA256",
    "AES256-SHA256",
    "AES128-SHA",
    "AES256-SHA",
    "DES-CBC3-SHA",
];

/// Kind applied when no profile (or an empty type) is configured
pub const DEFAULT_PROFILE_TYPE: TlsProfileType = TlsProfileType::Intermediate;

impl TlsProfileType {
    /// Cipher list and minimum version of a predefined kind; `None` for Custom
    pub fn preset_spec(self) -> Option<TlsProfileSpec> {
        let (ciphers, min_tls_version) = match self {
            TlsProfileType::Old => (OLD_CIPHERS, TlsProtocolVersion::Tls10),
            TlsProfileType::Intermediate => (INTERMEDIATE_CIPHERS, TlsProtocolVersion::Tls12),
            TlsProfileType::Modern => (MODERN_CIPHERS, TlsProtocolVersion::Tls13),
            TlsProfileType::Custom => return None,
        };
        Some(TlsProfileSpec {
            ciphers: ciphers.iter().map(ToString::to_string).collect(),
            min_tls_version,
        })
    }
}

impl TlsProfile {
    /// Cipher list and minimum version this profile stands for
    pub fn spec(&self) -> TlsProfileSpec {
        match self {
            TlsProfile::Custom(spec) => spec.clone(),
            preset => preset
                .profile_type()
                .preset_spec()
                .unwrap_or_default(),
        }
    }
}

/// Resolve the cipher list and minimum version an API server would serve with
///
/// An absent profile, or one without a type, falls back to the Intermediate
/// preset. Returns `None` for a profile that does not resolve (unknown type or
/// tag/field mismatch); run
/// [`crate::validation::validate_tls_security_profile`] for the reasons.
pub fn effective_profile_spec(profile: Option<&TlsSecurityProfile>) -> Option<TlsProfileSpec> {
    match profile {
        None => DEFAULT_PROFILE_TYPE.preset_spec(),
        Some(p) if p.r#type.is_empty() && !p.has_any_field() => DEFAULT_PROFILE_TYPE.preset_spec(),
        Some(p) => p.resolve().map(|resolved| resolved.spec()),
    }
}
