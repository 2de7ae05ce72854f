//! # Field Errors
//!
//! Field paths and the structured errors validation produces.
//!
//! Errors render the way the API server reports them, e.g.
//! `spec.servingCerts[1].names[1]: Invalid value: "internal.host.com": may not match internal loadbalancer: "internal.host.com"`.

use std::fmt;

/// Path to a field inside a resource, e.g. `spec.servingCerts[0].names[1]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    rendered: String,
}

impl FieldPath {
    pub fn new(root: &str) -> Self {
        Self {
            rendered: root.to_string(),
        }
    }

    /// Append one `.name` segment
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self {
            rendered: format!("{}.{name}", self.rendered),
        }
    }

    /// Append several `.name` segments
    #[must_use]
    pub fn children(&self, names: &[&str]) -> Self {
        names.iter().fold(self.clone(), |path, name| path.child(name))
    }

    /// Append an `[index]` segment
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self {
            rendered: format!("{}[{index}]", self.rendered),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Offending value carried by an invalid-value error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    List(Vec<String>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(value) => write!(f, "{value:?}"),
            FieldValue::List(values) => write!(f, "{values:?}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&[String]> for FieldValue {
    fn from(values: &[String]) -> Self {
        FieldValue::List(values.to_vec())
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The supplied value violates a constraint
    #[error("{field}: Invalid value: {value}: {detail}")]
    Invalid {
        field: FieldPath,
        value: FieldValue,
        detail: String,
    },
    /// A field that the rest of the object makes mandatory is unset
    #[error("{field}: Required value: {detail}")]
    Required { field: FieldPath, detail: String },
}

impl FieldError {
    pub fn invalid(field: FieldPath, value: impl Into<FieldValue>, detail: impl Into<String>) -> Self {
        FieldError::Invalid {
            field,
            value: value.into(),
            detail: detail.into(),
        }
    }

    pub fn required(field: FieldPath, detail: impl Into<String>) -> Self {
        FieldError::Required {
            field,
            detail: detail.into(),
        }
    }

    pub fn field(&self) -> &FieldPath {
        match self {
            FieldError::Invalid { field, .. } | FieldError::Required { field, .. } => field,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            FieldError::Invalid { detail, .. } | FieldError::Required { detail, .. } => detail,
        }
    }

    /// Short machine-readable kind, the `kind` label of the field error counter
    pub fn kind(&self) -> &'static str {
        match self {
            FieldError::Invalid { .. } => "FieldValueInvalid",
            FieldError::Required { .. } => "FieldValueRequired",
        }
    }
}

/// Validation errors in the order they were found
pub type ErrorList = Vec<FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_rendering() {
        let path = FieldPath::new("spec")
            .child("servingCerts")
            .index(1)
            .child("names")
            .index(0);
        assert_eq!(path.as_str(), "spec.servingCerts[1].names[0]");
        assert_eq!(
            FieldPath::new("testSpec")
                .children(&["custom", "ciphers"])
                .to_string(),
            "testSpec.custom.ciphers"
        );
    }

    #[test]
    fn test_invalid_string_value_rendering() {
        let err = FieldError::invalid(
            FieldPath::new("testSpec").child("type"),
            "something",
            "unknown type",
        );
        assert_eq!(
            err.to_string(),
            r#"testSpec.type: Invalid value: "something": unknown type"#
        );
        assert_eq!(err.kind(), "FieldValueInvalid");
    }

    #[test]
    fn test_invalid_list_value_rendering() {
        let ciphers = vec!["UNKNOWN_CIPHER".to_string(), "other".to_string()];
        let err = FieldError::invalid(
            FieldPath::new("p").child("ciphers"),
            ciphers.as_slice(),
            "no supported cipher suite found",
        );
        assert_eq!(
            err.to_string(),
            r#"p.ciphers: Invalid value: ["UNKNOWN_CIPHER", "other"]: no supported cipher suite found"#
        );
    }

    #[test]
    fn test_required_rendering() {
        let err = FieldError::required(FieldPath::new("p").child("old"), "must be set");
        assert_eq!(err.to_string(), "p.old: Required value: must be set");
        assert_eq!(err.field().as_str(), "p.old");
        assert_eq!(err.detail(), "must be set");
    }
}
