//! # Static Infrastructure Lookup

use super::{InfrastructureLookup, LookupError};
use crate::crd::Infrastructure;
use async_trait::async_trait;

/// Serves a fixed infrastructure object, or reports it missing
#[derive(Debug, Clone)]
pub struct StaticInfrastructureLookup {
    name: String,
    infrastructure: Option<Infrastructure>,
}

impl StaticInfrastructureLookup {
    pub fn new(infrastructure: Infrastructure) -> Self {
        Self {
            name: infrastructure
                .metadata
                .name
                .clone()
                .unwrap_or_else(|| crate::constants::DEFAULT_INFRASTRUCTURE_NAME.to_string()),
            infrastructure: Some(infrastructure),
        }
    }

    /// Lookup whose object only carries the internal API address
    pub fn with_internal_uri(internal_uri: &str) -> Self {
        Self::new(Infrastructure::with_internal_uri(
            crate::constants::DEFAULT_INFRASTRUCTURE_NAME,
            internal_uri,
        ))
    }

    /// Lookup for which the object does not exist
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            infrastructure: None,
        }
    }
}

#[async_trait]
impl InfrastructureLookup for StaticInfrastructureLookup {
    fn name(&self) -> &str {
        &self.name
    }

    async fn infrastructure(&self) -> Result<Infrastructure, LookupError> {
        self.infrastructure
            .clone()
            .ok_or_else(|| LookupError::NotFound {
                name: self.name.clone(),
            })
    }
}
