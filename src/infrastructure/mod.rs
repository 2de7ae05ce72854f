//! # Infrastructure Lookup
//!
//! Read access to the cluster `Infrastructure` object, the single external
//! input of SNI validation.
//!
//! - `cluster`: lookup against the Kubernetes API
//! - `fixed`: in-memory lookup for tests and offline use
//!
//! Lookups are neither cached nor retried; every validation reads the current
//! object. Callers that need a deadline wrap the returned future themselves.

mod cluster;
mod fixed;

pub use self::cluster::KubeInfrastructureLookup;
pub use self::fixed::StaticInfrastructureLookup;

use crate::crd::Infrastructure;
use async_trait::async_trait;

/// Failure to obtain the internal API hostname
///
/// Distinct from field errors: the configuration under validation is not at
/// fault, so admission should answer with a server error.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("infrastructure {name:?} not found")]
    NotFound { name: String },
    #[error("failed to get infrastructure {name:?}: {source}")]
    Api {
        name: String,
        #[source]
        source: kube::Error,
    },
    #[error("infrastructure {name:?} has no status.apiServerInternalURI")]
    MissingInternalUri { name: String },
    /// Backend failure of an `InfrastructureLookup` implemented outside this
    /// crate (caches, informers, proxies); always transient
    #[error("infrastructure lookup unavailable: {0}")]
    Unavailable(String),
}

impl LookupError {
    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, LookupError::Api { .. } | LookupError::Unavailable(_))
    }
}

/// Read-only accessor for the cluster infrastructure object
#[async_trait]
pub trait InfrastructureLookup: Send + Sync {
    /// Name of the object being read, for diagnostics
    fn name(&self) -> &str;

    /// Fetch the current infrastructure object
    async fn infrastructure(&self) -> Result<Infrastructure, LookupError>;

    /// Fetch the reserved internal API hostname
    ///
    /// A missing or empty `status.apiServerInternalURI` is a lookup failure.
    async fn internal_hostname(&self) -> Result<String, LookupError> {
        let infrastructure = self.infrastructure().await?;
        infrastructure
            .internal_uri()
            .map(ToString::to_string)
            .ok_or_else(|| LookupError::MissingInternalUri {
                name: self.name().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lookup backed by something other than the API server, e.g. a warming cache
    struct WarmingCache;

    #[async_trait]
    impl InfrastructureLookup for WarmingCache {
        fn name(&self) -> &str {
            "cluster"
        }

        async fn infrastructure(&self) -> Result<Infrastructure, LookupError> {
            Err(LookupError::Unavailable("informer cache not synced".to_string()))
        }
    }

    #[tokio::test]
    async fn test_external_backend_failure_is_transient() {
        let err = WarmingCache
            .internal_hostname()
            .await
            .expect_err("lookup should fail");
        assert!(err.is_transient());
        assert_eq!(
            err.to_string(),
            "infrastructure lookup unavailable: informer cache not synced"
        );
    }

    #[test]
    fn test_missing_data_is_not_transient() {
        let name = "cluster".to_string();
        assert!(!LookupError::NotFound { name: name.clone() }.is_transient());
        assert!(!LookupError::MissingInternalUri { name }.is_transient());
    }
}
