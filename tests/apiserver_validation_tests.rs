//! # APIServer Validation Tests
//!
//! End-to-end checks over resources deserialized from YAML, as the admission
//! framework would hand them over.

use apiserver_tls_validator::crd::{ApiServer, Infrastructure, TlsProfileType};
use apiserver_tls_validator::infrastructure::{InfrastructureLookup, StaticInfrastructureLookup};
use apiserver_tls_validator::tls::effective_profile_spec;
use apiserver_tls_validator::validation::validate_apiserver;

const INFRASTRUCTURE_YAML: &str = r#"
apiVersion: config.openshift.io/v1
kind: Infrastructure
metadata:
  name: cluster
spec:
  cloudConfig:
    name: cloud-provider-config
status:
  infrastructureName: demo-x7k2p
  apiServerURL: https://api.demo.example.com:6443
  apiServerInternalURI: api-int.demo.example.com
"#;

fn parse_apiserver(yaml: &str) -> ApiServer {
    serde_yaml::from_str(yaml).expect("APIServer fixture should deserialize")
}

fn lookup() -> StaticInfrastructureLookup {
    let infrastructure: Infrastructure =
        serde_yaml::from_str(INFRASTRUCTURE_YAML).expect("Infrastructure fixture should deserialize");
    StaticInfrastructureLookup::new(infrastructure)
}

#[tokio::test]
async fn test_infrastructure_fixture_exposes_internal_hostname() {
    let lookup = lookup();
    assert_eq!(lookup.name(), "cluster");
    assert_eq!(
        lookup.internal_hostname().await.expect("hostname"),
        "api-int.demo.example.com"
    );
}

#[tokio::test]
async fn test_valid_apiserver() {
    let apiserver = parse_apiserver(
        r#"
apiVersion: config.openshift.io/v1
kind: APIServer
metadata:
  name: cluster
spec:
  servingCerts:
    namedCertificates:
      - names: ["api.demo.example.com"]
        servingCertificate:
          name: api-cert
  tlsSecurityProfile:
    type: Modern
    modern: {}
"#,
    );
    let errs = validate_apiserver(&apiserver, &lookup())
        .await
        .expect("lookup should succeed");
    assert!(errs.is_empty(), "unexpected errors: {errs:?}");
}

#[tokio::test]
async fn test_errors_from_both_checks_are_concatenated() {
    let apiserver = parse_apiserver(
        r#"
apiVersion: config.openshift.io/v1
kind: APIServer
metadata:
  name: cluster
spec:
  servingCerts:
    namedCertificates:
      - names: ["api-int.*"]
        servingCertificate:
          name: shadow-cert
  tlsSecurityProfile:
    type: Custom
    custom:
      ciphers: ["RC4-MD5"]
      minTLSVersion: VersionTLS12
"#,
    );
    let errs = validate_apiserver(&apiserver, &lookup())
        .await
        .expect("lookup should succeed");
    let rendered: Vec<String> = errs.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            r#"spec.servingCerts[0].names[0]: Invalid value: "api-int.*": may not match internal loadbalancer: "api-int.demo.example.com""#.to_string(),
            r#"spec.tlsSecurityProfile.custom.ciphers: Invalid value: ["RC4-MD5"]: no supported cipher suite found"#.to_string(),
        ]
    );
}

#[tokio::test]
async fn test_lookup_failure_hides_profile_errors() {
    let apiserver = parse_apiserver(
        r#"
apiVersion: config.openshift.io/v1
kind: APIServer
metadata:
  name: cluster
spec:
  servingCerts:
    namedCertificates:
      - names: ["api.demo.example.com"]
  tlsSecurityProfile:
    type: something
"#,
    );
    let result =
        validate_apiserver(&apiserver, &StaticInfrastructureLookup::missing("cluster")).await;
    assert!(result.is_err());
}

#[test]
fn test_minimal_apiserver_defaults() {
    let apiserver = parse_apiserver(
        r#"
apiVersion: config.openshift.io/v1
kind: APIServer
metadata:
  name: cluster
spec: {}
"#,
    );
    assert!(apiserver.spec.serving_certs.named_certificates.is_empty());
    assert!(apiserver.spec.tls_security_profile.is_none());
    assert_eq!(
        effective_profile_spec(apiserver.spec.tls_security_profile.as_ref()),
        TlsProfileType::Intermediate.preset_spec()
    );
}

#[test]
fn test_apiserver_round_trips_wire_names() {
    let apiserver = parse_apiserver(
        r#"
apiVersion: config.openshift.io/v1
kind: APIServer
metadata:
  name: cluster
spec:
  clientCA:
    name: client-ca
  additionalCORSAllowedOrigins: ["//127\\.0\\.0\\.1(:|$)"]
  tlsSecurityProfile:
    type: Intermediate
    intermediate: {}
"#,
    );
    let value = serde_json::to_value(&apiserver).expect("serialize");
    assert_eq!(value["spec"]["clientCA"]["name"], "client-ca");
    assert_eq!(
        value["spec"]["additionalCORSAllowedOrigins"][0],
        "//127\\.0\\.0\\.1(:|$)"
    );
    assert_eq!(value["spec"]["tlsSecurityProfile"]["type"], "Intermediate");
    assert!(value["spec"]["tlsSecurityProfile"]["intermediate"].is_object());
}
