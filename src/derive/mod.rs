//! The schema derivation engine.
//!
//! [`derive_schema`] walks a [`TypeDescriptor`] and produces a normalized
//! Avro [`SchemaNode`] tree. Dispatch is purely structural: primitives bottom
//! out in the type table, containers and products recurse through their
//! element and field types, and closed variant sets choose between enum and
//! union encodings.
//!
//! Each call builds a fresh [`DeriveContext`] that memoizes named schemas by
//! fullname. A second occurrence of a name (including a recursive
//! self-reference) is emitted as a by-name reference, and a name reappearing
//! with a different structural shape is a
//! [`SchemaError::NameCollision`].

pub mod containers;
pub mod fields;
pub mod namespace;
pub mod primitives;
pub mod records;
pub mod unions;
pub mod variants;

use std::collections::HashMap;

use crate::config::DeriveConfig;
use crate::error::SchemaError;
use crate::ir::{ContainerDescriptor, TypeDescriptor, VariantsDescriptor};
use crate::schema::{fullname, SchemaNode};

/// Derive the schema for one type descriptor.
pub fn derive_schema(
    descriptor: &TypeDescriptor,
    config: &DeriveConfig,
) -> Result<SchemaNode, SchemaError> {
    let mut ctx = DeriveContext::new(config);
    ctx.derive(descriptor)
}

/// Identity of a named schema, used for collision detection and memoization.
///
/// Two registrations of the same fullname are compatible only when their
/// fingerprints are equal; the second then becomes a by-name reference.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Fingerprint {
    /// A full type descriptor (products, variant sets).
    Descriptor(TypeDescriptor),

    /// A tuple container (named positionally under the reserved namespace).
    Tuple(ContainerDescriptor),

    /// A fixed-size override of the given byte size.
    Fixed(usize),

    /// A zero-field record standing in for a unit variant.
    UnitVariant,
}

/// Per-derivation state: ambient configuration plus the named-schema table.
pub(crate) struct DeriveContext<'a> {
    pub(crate) config: &'a DeriveConfig,
    named: HashMap<String, Fingerprint>,
}

impl<'a> DeriveContext<'a> {
    pub(crate) fn new(config: &'a DeriveConfig) -> Self {
        Self {
            config,
            named: HashMap::new(),
        }
    }

    /// Dispatch on the descriptor kind.
    pub(crate) fn derive(
        &mut self,
        descriptor: &TypeDescriptor,
    ) -> Result<SchemaNode, SchemaError> {
        match descriptor {
            TypeDescriptor::Primitive { primitive } => {
                Ok(primitives::resolve(*primitive, &self.config.decimal))
            }
            TypeDescriptor::Container(container) => containers::derive_container(self, container),
            TypeDescriptor::Product(product) => records::derive_product(self, product),
            TypeDescriptor::Variants(hierarchy) => variants::derive_variants(self, hierarchy),
            TypeDescriptor::Reference { name, namespace } => Ok(SchemaNode::Ref {
                name: name.clone(),
                namespace: namespace.clone(),
            }),
        }
    }

    /// Register a named schema before building it.
    ///
    /// Returns `Some(reference)` when the fullname has already been seen with
    /// an equal fingerprint (the caller should emit the reference instead of
    /// rebuilding), `None` when the name is fresh, and an error when the
    /// fullname reappears with a different shape.
    pub(crate) fn register_named(
        &mut self,
        name: &str,
        ns: Option<&str>,
        fingerprint: Fingerprint,
    ) -> Result<Option<SchemaNode>, SchemaError> {
        let key = fullname(name, ns);
        match self.named.get(&key) {
            Some(existing) if *existing == fingerprint => Ok(Some(SchemaNode::Ref {
                name: name.to_string(),
                namespace: ns.map(str::to_string),
            })),
            Some(_) => Err(SchemaError::NameCollision { fullname: key }),
            None => {
                self.named.insert(key, fingerprint);
                Ok(None)
            }
        }
    }

    /// Resolve a declared type name: rename override wins, else the raw name.
    pub(crate) fn resolve_type_name<'n>(
        &self,
        declared: &'n str,
        rename: Option<&'n str>,
    ) -> &'n str {
        rename.unwrap_or(declared)
    }
}

/// Decide whether a closed hierarchy encodes as an enum.
pub(crate) fn encodes_as_enum(hierarchy: &VariantsDescriptor) -> bool {
    !hierarchy.variants.is_empty() && hierarchy.is_unit_only()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::PrimitiveKind;

    #[test]
    fn test_register_fresh_name() {
        let config = DeriveConfig::default();
        let mut ctx = DeriveContext::new(&config);
        let result = ctx
            .register_named("User", Some("app"), Fingerprint::Fixed(4))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_register_repeat_yields_ref() {
        let config = DeriveConfig::default();
        let mut ctx = DeriveContext::new(&config);
        ctx.register_named("User", Some("app"), Fingerprint::Fixed(4))
            .unwrap();
        let result = ctx
            .register_named("User", Some("app"), Fingerprint::Fixed(4))
            .unwrap();
        assert_eq!(
            result,
            Some(SchemaNode::Ref {
                name: "User".to_string(),
                namespace: Some("app".to_string()),
            })
        );
    }

    #[test]
    fn test_register_conflicting_shape_fails() {
        let config = DeriveConfig::default();
        let mut ctx = DeriveContext::new(&config);
        ctx.register_named("User", Some("app"), Fingerprint::Fixed(4))
            .unwrap();
        let err = ctx
            .register_named("User", Some("app"), Fingerprint::Fixed(8))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::NameCollision {
                fullname: "app.User".to_string(),
            }
        );
    }

    #[test]
    fn test_derive_primitive_entry_point() {
        let schema = derive_schema(
            &TypeDescriptor::primitive(PrimitiveKind::Boolean),
            &DeriveConfig::default(),
        )
        .unwrap();
        assert_eq!(schema.to_json(), serde_json::json!("boolean"));
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
