//! APIServer TLS Validator Library
//!
//! Admission-time validation of an API server's TLS-facing settings:
//!
//! - serving certificate SNI names may not shadow the cluster's reserved
//!   internal load-balancer hostname;
//! - a TLS security profile's type must agree with its populated field, and a
//!   custom cipher list must name at least one supported cipher.
//!
//! The admission framework calling into this crate owns transport, merging
//! with other admission rules and rendering the rejection.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apiserver_tls_validator::prelude::*;
//!
//! # async fn run(apiserver: ApiServer) -> anyhow::Result<()> {
//! let lookup = StaticInfrastructureLookup::with_internal_uri("api-int.example.com");
//! let errs = validate_apiserver(&apiserver, &lookup).await?;
//! for err in &errs {
//!     println!("{err}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod crd;
pub mod infrastructure;
pub mod observability;
pub mod prelude;
pub mod tls;
pub mod validation;
