//! # TLS Reference Data
//!
//! - `ciphers`: static cipher catalog, keyed by OpenSSL-style name
//! - `presets`: cipher lists behind the predefined profile kinds

mod ciphers;
mod presets;

pub use ciphers::{CipherCatalog, CipherClass, CipherSuite};
pub use presets::{effective_profile_spec, DEFAULT_PROFILE_TYPE};
