//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use apiserver_tls_validator::prelude::*;
//! ```

// Resource types
pub use crate::crd::*;

// Infrastructure lookup
pub use crate::infrastructure::{
    InfrastructureLookup, KubeInfrastructureLookup, LookupError, StaticInfrastructureLookup,
};

// Validation entry points and error types
pub use crate::validation::{
    validate_apiserver, validate_sni_names, validate_tls_security_profile, ErrorList, FieldError,
    FieldPath, FieldValue,
};

// Reference data
pub use crate::tls::{effective_profile_spec, CipherCatalog, CipherClass};

// Config
pub use crate::config::ValidatorConfig;
