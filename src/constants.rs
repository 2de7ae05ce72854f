//! # Constants
//!
//! Shared constants used throughout the validator.
//!
//! Defaults here can be overridden via environment variables where
//! [`crate::config::ValidatorConfig`] reads them.

/// Name of the singleton Infrastructure object
pub const DEFAULT_INFRASTRUCTURE_NAME: &str = "cluster";

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (json, text)
pub const DEFAULT_LOG_FORMAT: &str = "json";

/// Root of every field path reported against an APIServer resource
pub const SPEC_FIELD: &str = "spec";

/// Field path segments leading to the SNI names of a serving certificate
pub const SERVING_CERTS_FIELD: &str = "servingCerts";
pub const NAMES_FIELD: &str = "names";

/// Field path segment of the TLS security profile in the APIServer spec
pub const TLS_SECURITY_PROFILE_FIELD: &str = "tlsSecurityProfile";

/// Suffix marking a wildcard SNI pattern
pub const WILDCARD_SUFFIX: &str = ".*";
