//! # Validation
//!
//! Admission-time checks for the TLS-facing settings of an APIServer.
//!
//! - `field`: field paths and structured errors
//! - `sni`: serving certificate names vs. the internal load balancer
//! - `tls_profile`: TLS security profile consistency
//! - `apiserver`: both checks over one resource

mod apiserver;
mod field;
mod sni;
mod tls_profile;

pub use apiserver::validate_apiserver;
pub use field::{ErrorList, FieldError, FieldPath, FieldValue};
pub use sni::{sni_conflicts, sni_pattern_matches, validate_sni_names};
pub use tls_profile::validate_tls_security_profile;
