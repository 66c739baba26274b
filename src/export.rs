//! Export utilities for rendering `.avsc` schema documents.

use crate::registry::SchemaRegistry;
use crate::schema::SchemaNode;

/// Configuration for schema document rendering.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Whether to pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ExportConfig {
    /// Create a new export configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Render one schema as an `.avsc` document.
pub fn render_schema(schema: &SchemaNode, config: &ExportConfig) -> String {
    let json = schema.to_json();
    if config.pretty {
        // Serialization of an already-built Value cannot fail.
        serde_json::to_string_pretty(&json).unwrap_or_default()
    } else {
        json.to_string()
    }
}

/// Render every named schema in a registry, one document per schema,
/// paired with its fullname. The order is the registry's insertion order,
/// so a type registered before its dependents stays before them.
pub fn render_registry(registry: &SchemaRegistry, config: &ExportConfig) -> Vec<(String, String)> {
    registry
        .schemas()
        .map(|(fullname, schema)| (fullname.to_string(), render_schema(schema, config)))
        .collect()
}

/// Suggested file name for a schema's document: the fullname plus `.avsc`.
pub fn document_name(fullname: &str) -> String {
    format!("{fullname}.avsc")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{FieldDescriptor, ProductDescriptor, TypeDescriptor};
    use crate::reflect::AvroTyped;

    struct User;

    impl AvroTyped for User {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::Product(
                ProductDescriptor::new(
                    "User",
                    vec![FieldDescriptor::new("name", String::descriptor())],
                )
                .with_namespace("app"),
            )
        }
    }

    #[test]
    fn test_render_compact() {
        let schema = User::schema().unwrap();
        let config = ExportConfig::new().with_pretty(false);
        assert_eq!(
            render_schema(&schema, &config),
            r#"{"type":"record","name":"User","namespace":"app","fields":[{"name":"name","type":"string"}]}"#
        );
    }

    #[test]
    fn test_render_pretty_is_valid_json() {
        let schema = User::schema().unwrap();
        let rendered = render_schema(&schema, &ExportConfig::default());
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, schema.to_json());
    }

    #[test]
    fn test_render_registry() {
        let mut registry = SchemaRegistry::new();
        registry.register::<User>().unwrap();
        let documents = render_registry(&registry, &ExportConfig::new().with_pretty(false));
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].0, "app.User");
        assert!(documents[0].1.contains(r#""type":"record""#));
    }

    #[test]
    fn test_document_name() {
        assert_eq!(document_name("app.User"), "app.User.avsc");
    }
}
