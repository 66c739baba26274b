//! Resolved annotation sets for types, fields, and variants.
//!
//! The front end parses whatever attribute syntax it supports and hands the
//! engine one [`Annotations`] value per type, field, and variant. Directives
//! the front end does not recognize never reach the engine, so there is no
//! string matching inside the derivation code.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The recognized directives for one type, field, or variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    /// Replace the derived name outright, bypassing the naming convention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,

    /// Override the namespace of the annotated schema and everything nested
    /// inside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Replace the schema with an Avro `fixed` of this many bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_size: Option<usize>,

    /// Documentation text emitted as the Avro `doc` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// Alternate names emitted as the Avro `aliases` attribute.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Custom properties attached verbatim to the schema node, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<(String, Value)>,
}

impl Annotations {
    /// Create an empty annotation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit rename.
    pub fn with_rename(mut self, rename: impl Into<String>) -> Self {
        self.rename = Some(rename.into());
        self
    }

    /// Set a namespace override.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set a fixed-size override.
    pub fn with_fixed_size(mut self, size: usize) -> Self {
        self.fixed_size = Some(size);
        self
    }

    /// Set documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Add a custom property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// Check whether no directive is set.
    pub fn is_empty(&self) -> bool {
        self.rename.is_none()
            && self.namespace.is_none()
            && self.fixed_size.is_none()
            && self.doc.is_none()
            && self.aliases.is_empty()
            && self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Annotations::default().is_empty());
    }

    #[test]
    fn test_builder() {
        let ann = Annotations::new()
            .with_rename("emailAddress")
            .with_namespace("com.example")
            .with_doc("primary contact address")
            .with_alias("email")
            .with_property("sensitivity", "pii");

        assert_eq!(ann.rename.as_deref(), Some("emailAddress"));
        assert_eq!(ann.namespace.as_deref(), Some("com.example"));
        assert_eq!(ann.doc.as_deref(), Some("primary contact address"));
        assert_eq!(ann.aliases, vec!["email"]);
        assert_eq!(ann.properties.len(), 1);
        assert!(!ann.is_empty());
    }

    #[test]
    fn test_fixed_size() {
        let ann = Annotations::new().with_fixed_size(16);
        assert_eq!(ann.fixed_size, Some(16));
        assert!(!ann.is_empty());
    }
}
