//! # Cluster Infrastructure Lookup

use super::{InfrastructureLookup, LookupError};
use crate::config::ValidatorConfig;
use crate::crd::Infrastructure;
use crate::observability::metrics;
use anyhow::{Context, Result};
use async_trait::async_trait;
use kube::{Api, Client};
use std::time::Instant;
use tracing::{debug, warn};

/// Reads the cluster-scoped `Infrastructure` object through the API server
#[derive(Clone)]
pub struct KubeInfrastructureLookup {
    api: Api<Infrastructure>,
    name: String,
}

impl std::fmt::Debug for KubeInfrastructureLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeInfrastructureLookup")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl KubeInfrastructureLookup {
    pub fn new(client: Client, name: impl Into<String>) -> Self {
        Self {
            api: Api::all(client),
            name: name.into(),
        }
    }

    /// Build a lookup from the ambient kubeconfig / in-cluster environment
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub async fn try_default(config: &ValidatorConfig) -> Result<Self> {
        // rustls 0.23 needs a process-level provider before the client connects;
        // an embedding process may already have installed one
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            debug!("rustls crypto provider already installed");
        }

        let client = Client::try_default()
            .await
            .context("Failed to create Kubernetes client. Ensure kubeconfig is configured.")?;
        Ok(Self::new(client, config.infrastructure_name.clone()))
    }
}

#[async_trait]
impl InfrastructureLookup for KubeInfrastructureLookup {
    fn name(&self) -> &str {
        &self.name
    }

    async fn infrastructure(&self) -> Result<Infrastructure, LookupError> {
        let start = Instant::now();
        let result = self.api.get_opt(&self.name).await;
        metrics::observe_lookup_duration(start.elapsed().as_secs_f64());

        match result {
            Ok(Some(infrastructure)) => Ok(infrastructure),
            Ok(None) => {
                warn!(infrastructure = %self.name, "infrastructure object not found");
                Err(LookupError::NotFound {
                    name: self.name.clone(),
                })
            }
            Err(source) => {
                warn!(infrastructure = %self.name, error = %source, "infrastructure lookup failed");
                Err(LookupError::Api {
                    name: self.name.clone(),
                    source,
                })
            }
        }
    }
}
