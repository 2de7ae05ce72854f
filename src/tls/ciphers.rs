//! # Cipher Catalog
//!
//! Static table of the cipher suites the API server can actually serve, keyed
//! by OpenSSL-style name. TLS 1.3 suites share their OpenSSL and IANA names.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Protocol generation a cipher suite belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherClass {
    /// Negotiable with TLS 1.2 and earlier
    Tls12OrEarlier,
    /// TLS 1.3 only
    Tls13,
}

impl fmt::Display for CipherClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tls12OrEarlier => f.write_str("TLS1.2-or-earlier"),
            Self::Tls13 => f.write_str("TLS1.3"),
        }
    }
}

/// One entry of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSuite {
    pub openssl_name: &'static str,
    pub iana_name: &'static str,
    /// IANA code point
    pub id: u16,
    pub class: CipherClass,
}

const fn suite(
    openssl_name: &'static str,
    iana_name: &'static str,
    id: u16,
    class: CipherClass,
) -> CipherSuite {
    CipherSuite {
        openssl_name,
        iana_name,
        id,
        class,
    }
}

use CipherClass::{Tls12OrEarlier, Tls13};

static CIPHER_SUITES: [CipherSuite; 21] = [
    // TLS 1.3
    suite("TLS_AES_128_GCM_SHA256", "TLS_AES_128_GCM_SHA256", 0x1301, Tls13),
    suite("TLS_AES_256_GCM_SHA384", "TLS_AES_256_GCM_SHA384", 0x1302, Tls13),
    suite(
        "TLS_CHACHA20_POLY1305_SHA256",
        "TLS_CHACHA20_POLY1305_SHA256",
        0x1303,
        Tls13,
    ),
    // TLS 1.2
    suite(
        "ECDHE-ECDSA-AES128-GCM-SHA256",
        "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
        0xC02B,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-RSA-AES128-GCM-SHA256",
        "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
        0xC02F,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-ECDSA-AES256-GCM-SHA384",
        "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
        0xC02C,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-RSA-AES256-GCM-SHA384",
        "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        0xC030,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-ECDSA-CHACHA20-POLY1305",
        "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
        0xCCA9,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-RSA-CHACHA20-POLY1305",
        "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        0xCCA8,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-ECDSA-AES128-SHA256",
        "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256",
        0xC023,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-RSA-AES128-SHA256",
        "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256",
        0xC027,
        Tls12OrEarlier,
    ),
    // TLS 1.0
    suite(
        "ECDHE-ECDSA-AES128-SHA",
        "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
        0xC009,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-RSA-AES128-SHA",
        "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
        0xC013,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-ECDSA-AES256-SHA",
        "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA",
        0xC00A,
        Tls12OrEarlier,
    ),
    suite(
        "ECDHE-RSA-AES256-SHA",
        "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
        0xC014,
        Tls12OrEarlier,
    ),
    // TLS 1.2, RSA key exchange
    suite(
        "AES128-GCM-SHA256",
        "TLS_RSA_WITH_AES_128_GCM_SHA256",
        0x009C,
        Tls12OrEarlier,
    ),
    suite(
        "AES256-GCM-SHA384",
        "TLS_RSA_WITH_AES_256_GCM_SHA384",
        0x009D,
        Tls12OrEarlier,
    ),
    suite(
        "AES128-SHA256",
        "TLS_RSA_WITH_AES_128_CBC_SHA256",
        0x003C,
        Tls12OrEarlier,
    ),
    // SSL 3.0
    suite(
        "AES128-SHA",
        "TLS_RSA_WITH_AES_128_CBC_SHA",
        0x002F,
        Tls12OrEarlier,
    ),
    suite(
        "AES256-SHA",
        "TLS_RSA_WITH_AES_256_CBC_SHA",
        0x0035,
        Tls12OrEarlier,
    ),
    suite(
        "DES-CBC3-SHA",
        "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
        0x000A,
        Tls12OrEarlier,
    ),
];

static GLOBAL: LazyLock<CipherCatalog> = LazyLock::new(|| CipherCatalog::new(&CIPHER_SUITES));

/// Read-only lookup over a set of cipher suites
#[derive(Debug)]
pub struct CipherCatalog {
    by_openssl_name: HashMap<&'static str, &'static CipherSuite>,
}

impl CipherCatalog {
    fn new(suites: &'static [CipherSuite]) -> Self {
        Self {
            by_openssl_name: suites
                .iter()
                .map(|suite| (suite.openssl_name, suite))
                .collect(),
        }
    }

    /// The process-wide catalog
    pub fn global() -> &'static CipherCatalog {
        &GLOBAL
    }

    /// Every suite in the catalog, TLS 1.3 first
    pub fn suites() -> &'static [CipherSuite] {
        &CIPHER_SUITES
    }

    pub fn lookup(&self, openssl_name: &str) -> Option<&'static CipherSuite> {
        self.by_openssl_name.get(openssl_name).copied()
    }

    pub fn is_supported(&self, openssl_name: &str) -> bool {
        self.by_openssl_name.contains_key(openssl_name)
    }

    pub fn protocol_class(&self, openssl_name: &str) -> Option<CipherClass> {
        self.lookup(openssl_name).map(|suite| suite.class)
    }

    /// Map OpenSSL-style names to IANA names, dropping the ones the catalog
    /// does not know. Input order is preserved.
    pub fn to_iana<S: AsRef<str>>(&self, openssl_names: &[S]) -> Vec<&'static str> {
        openssl_names
            .iter()
            .filter_map(|name| self.lookup(name.as_ref()))
            .map(|suite| suite.iana_name)
            .collect()
    }

    /// Split names into (recognized, unrecognized), preserving order
    pub fn partition<'a, S: AsRef<str>>(&self, names: &'a [S]) -> (Vec<&'a str>, Vec<&'a str>) {
        names
            .iter()
            .map(AsRef::as_ref)
            .partition(|name| self.is_supported(name))
    }
}
