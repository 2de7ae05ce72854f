//! # Infrastructure
//!
//! Cluster infrastructure status, read to learn the reserved internal API
//! load-balancer hostname.

use serde::{Deserialize, Serialize};

/// Infrastructure Custom Resource Definition
///
/// A singleton (named `cluster`) written by the installer. Only the status is
/// consumed here.
#[derive(
    kube::CustomResource, Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema,
)]
#[kube(
    kind = "Infrastructure",
    group = "config.openshift.io",
    version = "v1",
    status = "InfrastructureStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureSpec {
    /// Cloud provider configuration consumed by cloud controllers
    #[serde(default)]
    pub cloud_config: Option<ConfigMapFileReference>,
}

/// Reference to a single key of a config map
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ConfigMapFileReference {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
}

/// Observed infrastructure state
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureStatus {
    /// Unique name assigned to the cluster's infrastructure
    #[serde(default)]
    pub infrastructure_name: Option<String>,
    /// Externally reachable API server address
    #[serde(default, rename = "apiServerURL")]
    pub api_server_url: Option<String>,
    /// Reserved address of the internal API load balancer
    /// Serving certificate SNI names may not shadow it
    #[serde(default, rename = "apiServerInternalURI")]
    pub api_server_internal_uri: Option<String>,
}

impl Infrastructure {
    /// Build an infrastructure object carrying only the internal API address
    pub fn with_internal_uri(name: &str, internal_uri: &str) -> Self {
        let mut infrastructure = Self::new(name, InfrastructureSpec::default());
        infrastructure.status = Some(InfrastructureStatus {
            api_server_internal_uri: Some(internal_uri.to_string()),
            ..InfrastructureStatus::default()
        });
        infrastructure
    }

    /// The internal API address, if the installer has published one
    pub fn internal_uri(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|status| status.api_server_internal_uri.as_deref())
            .filter(|uri| !uri.trim().is_empty())
    }
}
