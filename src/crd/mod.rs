//! # Custom Resource Definitions
//!
//! Resource types consumed by the validator.
//!
//! ## Module Structure
//!
//! - `apiserver.rs` - APIServer spec: serving certificates and TLS profile
//! - `infrastructure.rs` - Infrastructure status: reserved internal API address
//! - `tls_profile.rs` - TLS security profile wire shape and validated sum type

mod apiserver;
mod infrastructure;
mod tls_profile;

pub use apiserver::{
    ApiServer, ApiServerNamedServingCert, ApiServerServingCerts, ApiServerSpec,
    ConfigMapNameReference, SecretNameReference,
};
pub use infrastructure::{
    ConfigMapFileReference, Infrastructure, InfrastructureSpec, InfrastructureStatus,
};
pub use tls_profile::{
    CustomTlsProfile, IntermediateTlsProfile, ModernTlsProfile, OldTlsProfile, TlsProfile,
    TlsProfileSpec, TlsProfileType, TlsProtocolVersion, TlsSecurityProfile, UnknownProfileType,
};
