//! # APIServer
//!
//! Cluster-scoped configuration for the API server's serving certificates and
//! TLS security profile.

use serde::{Deserialize, Serialize};

use crate::crd::TlsSecurityProfile;

/// APIServer Custom Resource Definition
///
/// Holds the administrator-supplied serving configuration that is validated
/// before admission.
///
/// # Example
///
/// ```yaml
/// apiVersion: config.openshift.io/v1
/// kind: APIServer
/// metadata:
///   name: cluster
/// spec:
///   servingCerts:
///     namedCertificates:
///       - names: ["api.example.com"]
///         servingCertificate:
///           name: api-example-com-tls
///   tlsSecurityProfile:
///     type: Intermediate
///     intermediate: {}
/// ```
#[derive(
    kube::CustomResource, Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema,
)]
#[kube(
    kind = "APIServer",
    root = "ApiServer",
    group = "config.openshift.io",
    version = "v1",
    shortname = "apiserver"
)]
#[serde(rename_all = "camelCase")]
pub struct ApiServerSpec {
    /// Additional serving certificates, selected by SNI
    #[serde(default)]
    pub serving_certs: ApiServerServingCerts,
    /// Config map holding the CA bundle used to verify client certificates
    #[serde(default, rename = "clientCA")]
    pub client_ca: Option<ConfigMapNameReference>,
    /// Regular expressions of origins allowed for CORS requests
    #[serde(default, rename = "additionalCORSAllowedOrigins")]
    pub additional_cors_allowed_origins: Vec<String>,
    /// TLS security profile for the API server
    /// When unset the platform default (Intermediate) applies
    #[serde(default)]
    pub tls_security_profile: Option<TlsSecurityProfile>,
}

/// Serving certificate overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiServerServingCerts {
    /// Certificates served for explicit host names
    #[serde(default)]
    pub named_certificates: Vec<ApiServerNamedServingCert>,
}

/// A serving certificate bound to a set of SNI names
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiServerNamedServingCert {
    /// Host names this certificate is served for
    /// A single trailing wildcard label is allowed (e.g. "api.*")
    #[serde(default)]
    pub names: Vec<String>,
    /// Secret holding the certificate and key
    #[serde(default)]
    pub serving_certificate: SecretNameReference,
}

/// Reference to a secret in the configuration namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SecretNameReference {
    #[serde(default)]
    pub name: String,
}

/// Reference to a config map in the configuration namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ConfigMapNameReference {
    #[serde(default)]
    pub name: String,
}

impl ApiServerSpec {
    /// Iterate over `(certificate index, certificate)` in declaration order
    pub fn named_certificates(&self) -> impl Iterator<Item = (usize, &ApiServerNamedServingCert)> {
        self.serving_certs.named_certificates.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::{CustomResourceExt, Resource};

    #[test]
    fn test_resource_identity() {
        assert_eq!(ApiServer::kind(&()), "APIServer");
        assert_eq!(ApiServer::group(&()), "config.openshift.io");
        assert_eq!(ApiServer::api_version(&()), "config.openshift.io/v1");
        assert_eq!(ApiServer::crd_name(), "apiservers.config.openshift.io");
    }

    #[test]
    fn test_new_resource_carries_spec() {
        let apiserver = ApiServer::new("cluster", ApiServerSpec::default());
        assert_eq!(apiserver.metadata.name.as_deref(), Some("cluster"));
        assert_eq!(apiserver.spec.named_certificates().count(), 0);
    }
}
