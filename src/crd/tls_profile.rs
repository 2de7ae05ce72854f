//! # TLS Security Profile
//!
//! Wire shape of a TLS security profile and its validated sum type.
//!
//! On the wire a profile is a `type` tag plus four optional sub-structures, of
//! which exactly the one matching the tag should be set:
//!
//! ```yaml
//! tlsSecurityProfile:
//!   type: Custom
//!   custom:
//!     ciphers:
//!       - ECDHE-ECDSA-CHACHA20-POLY1305
//!     minTLSVersion: VersionTLS12
//! ```
//!
//! [`TlsSecurityProfile::resolve`] turns a consistent profile into a
//! [`TlsProfile`]; inconsistencies are reported by
//! [`crate::validation::validate_tls_security_profile`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TLS security profile as written by the administrator
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TlsSecurityProfile {
    /// Profile kind: Old, Intermediate, Modern or Custom
    /// Kept as a plain string so unknown values can be reported
    #[serde(default)]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<OldTlsProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<IntermediateTlsProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modern: Option<ModernTlsProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomTlsProfile>,
}

/// Marker for the predefined "Old" profile (no user-supplied fields)
#[allow(
    clippy::empty_structs_with_brackets,
    reason = "serialized as an empty JSON object"
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub struct OldTlsProfile {}

/// Marker for the predefined "Intermediate" profile (no user-supplied fields)
#[allow(
    clippy::empty_structs_with_brackets,
    reason = "serialized as an empty JSON object"
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub struct IntermediateTlsProfile {}

/// Marker for the predefined "Modern" profile (no user-supplied fields)
#[allow(
    clippy::empty_structs_with_brackets,
    reason = "serialized as an empty JSON object"
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ModernTlsProfile {}

/// Administrator-chosen ciphers and minimum protocol version
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomTlsProfile {
    #[serde(flatten)]
    pub spec: TlsProfileSpec,
}

/// Cipher list and minimum protocol version of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TlsProfileSpec {
    /// OpenSSL-style cipher names (e.g. "ECDHE-RSA-AES128-GCM-SHA256")
    #[serde(default)]
    pub ciphers: Vec<String>,
    /// Lowest TLS version accepted
    #[serde(default, rename = "minTLSVersion")]
    pub min_tls_version: TlsProtocolVersion,
}

/// TLS protocol versions accepted as a profile minimum
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
    schemars::JsonSchema,
)]
pub enum TlsProtocolVersion {
    #[serde(rename = "VersionTLS10")]
    Tls10,
    #[serde(rename = "VersionTLS11")]
    Tls11,
    #[default]
    #[serde(rename = "VersionTLS12")]
    Tls12,
    #[serde(rename = "VersionTLS13")]
    Tls13,
}

impl TlsProtocolVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tls10 => "VersionTLS10",
            Self::Tls11 => "VersionTLS11",
            Self::Tls12 => "VersionTLS12",
            Self::Tls13 => "VersionTLS13",
        }
    }
}

impl fmt::Display for TlsProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known profile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlsProfileType {
    Old,
    Intermediate,
    Modern,
    Custom,
}

impl TlsProfileType {
    /// All kinds, in the order used when listing valid values
    pub const ALL: [TlsProfileType; 4] = [
        TlsProfileType::Old,
        TlsProfileType::Intermediate,
        TlsProfileType::Modern,
        TlsProfileType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Old => "Old",
            Self::Intermediate => "Intermediate",
            Self::Modern => "Modern",
            Self::Custom => "Custom",
        }
    }

    /// JSON field name of the sub-structure this kind requires
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::Intermediate => "intermediate",
            Self::Modern => "modern",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TlsProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known profile kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown TLS profile type {0:?}")]
pub struct UnknownProfileType(pub String);

impl FromStr for TlsProfileType {
    type Err = UnknownProfileType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownProfileType(s.to_string()))
    }
}

/// A profile whose tag and payload agree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsProfile {
    Old,
    Intermediate,
    Modern,
    Custom(TlsProfileSpec),
}

impl TlsProfile {
    pub fn profile_type(&self) -> TlsProfileType {
        match self {
            Self::Old => TlsProfileType::Old,
            Self::Intermediate => TlsProfileType::Intermediate,
            Self::Modern => TlsProfileType::Modern,
            Self::Custom(_) => TlsProfileType::Custom,
        }
    }
}

impl TlsSecurityProfile {
    /// Declared kind, `None` when the tag is empty or unknown
    pub fn profile_type(&self) -> Option<TlsProfileType> {
        self.r#type.parse().ok()
    }

    /// Whether the sub-structure belonging to `kind` is set
    pub fn has_field_for(&self, kind: TlsProfileType) -> bool {
        match kind {
            TlsProfileType::Old => self.old.is_some(),
            TlsProfileType::Intermediate => self.intermediate.is_some(),
            TlsProfileType::Modern => self.modern.is_some(),
            TlsProfileType::Custom => self.custom.is_some(),
        }
    }

    /// Whether any of the four sub-structures is set
    pub fn has_any_field(&self) -> bool {
        TlsProfileType::ALL
            .into_iter()
            .any(|kind| self.has_field_for(kind))
    }

    /// Convert into the sum type when the tag names a known kind and its
    /// sub-structure is present
    pub fn resolve(&self) -> Option<TlsProfile> {
        match self.profile_type()? {
            TlsProfileType::Old => self.old.as_ref().map(|_| TlsProfile::Old),
            TlsProfileType::Intermediate => {
                self.intermediate.as_ref().map(|_| TlsProfile::Intermediate)
            }
            TlsProfileType::Modern => self.modern.as_ref().map(|_| TlsProfile::Modern),
            TlsProfileType::Custom => self
                .custom
                .as_ref()
                .map(|custom| TlsProfile::Custom(custom.spec.clone())),
        }
    }
}

impl From<TlsProfile> for TlsSecurityProfile {
    fn from(profile: TlsProfile) -> Self {
        let mut wire = TlsSecurityProfile {
            r#type: profile.profile_type().as_str().to_string(),
            ..TlsSecurityProfile::default()
        };
        match profile {
            TlsProfile::Old => wire.old = Some(OldTlsProfile {}),
            TlsProfile::Intermediate => wire.intermediate = Some(IntermediateTlsProfile {}),
            TlsProfile::Modern => wire.modern = Some(ModernTlsProfile {}),
            TlsProfile::Custom(spec) => wire.custom = Some(CustomTlsProfile { spec }),
        }
        wire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_type_round_trips_through_str() {
        for kind in TlsProfileType::ALL {
            assert_eq!(kind.as_str().parse::<TlsProfileType>(), Ok(kind));
        }
        assert!("old".parse::<TlsProfileType>().is_err());
        assert!("".parse::<TlsProfileType>().is_err());
    }

    #[test]
    fn test_resolve_requires_matching_field() {
        let mismatched = TlsSecurityProfile {
            r#type: "Intermediate".to_string(),
            modern: Some(ModernTlsProfile {}),
            ..TlsSecurityProfile::default()
        };
        assert_eq!(mismatched.resolve(), None);

        let matched = TlsSecurityProfile::from(TlsProfile::Modern);
        assert_eq!(matched.resolve(), Some(TlsProfile::Modern));
    }

    #[test]
    fn test_resolve_custom_carries_spec() {
        let spec = TlsProfileSpec {
            ciphers: vec!["ECDHE-RSA-AES128-GCM-SHA256".to_string()],
            min_tls_version: TlsProtocolVersion::Tls11,
        };
        let wire = TlsSecurityProfile::from(TlsProfile::Custom(spec.clone()));
        assert_eq!(wire.r#type, "Custom");
        assert_eq!(wire.resolve(), Some(TlsProfile::Custom(spec)));
    }

    #[test]
    fn test_deserialize_custom_profile() {
        let profile: TlsSecurityProfile = serde_json::from_value(serde_json::json!({
            "type": "Custom",
            "custom": {
                "ciphers": ["ECDHE-ECDSA-CHACHA20-POLY1305"],
                "minTLSVersion": "VersionTLS13"
            }
        }))
        .expect("profile should deserialize");

        let custom = profile.custom.expect("custom should be set");
        assert_eq!(custom.spec.ciphers, vec!["ECDHE-ECDSA-CHACHA20-POLY1305"]);
        assert_eq!(custom.spec.min_tls_version, TlsProtocolVersion::Tls13);
    }

    #[test]
    fn test_deserialize_rejects_unknown_min_version() {
        let result = serde_json::from_value::<TlsSecurityProfile>(serde_json::json!({
            "type": "Custom",
            "custom": { "minTLSVersion": "VersionTLS14" }
        }));
        assert!(result.is_err());
    }
}
