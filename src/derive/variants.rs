//! Polymorphic hierarchy dispatch.
//!
//! A closed set of variants encodes as an enum when every variant is a
//! parameterless singleton, and as a union of per-variant schemas otherwise.
//! The front end states singleton-ness explicitly through
//! [`VariantShape`], so no structural heuristic runs here.

use crate::error::SchemaError;
use crate::ir::{TypeDescriptor, VariantShape, VariantsDescriptor};
use crate::schema::{EnumSchema, RecordSchema, SchemaNode};

use super::{encodes_as_enum, unions, DeriveContext, Fingerprint};

/// Derive the schema for a closed hierarchy of variants.
pub fn derive_variants(
    ctx: &mut DeriveContext<'_>,
    hierarchy: &VariantsDescriptor,
) -> Result<SchemaNode, SchemaError> {
    let name = ctx
        .resolve_type_name(&hierarchy.name, hierarchy.annotations.rename.as_deref())
        .to_string();
    let namespace = hierarchy
        .annotations
        .namespace
        .clone()
        .or_else(|| hierarchy.namespace.clone());

    if encodes_as_enum(hierarchy) {
        return derive_enum(ctx, hierarchy, name, namespace);
    }

    // Union encoding: derive each variant in declaration order and combine
    // through the safe union constructor. No default applies to a top-level
    // hierarchy, so no reordering happens.
    let mut members = Vec::with_capacity(hierarchy.variants.len());
    for variant in &hierarchy.variants {
        let schema = match &variant.shape {
            VariantShape::Data(ty) => ctx.derive(ty)?,
            VariantShape::Unit => {
                derive_unit_variant(ctx, variant.resolved_label(), namespace.as_deref())?
            }
        };
        members.push(schema);
    }

    unions::build_union(members, &name)
}

/// All-singleton hierarchies become enum schemas with one symbol per variant,
/// in declaration order.
fn derive_enum(
    ctx: &mut DeriveContext<'_>,
    hierarchy: &VariantsDescriptor,
    name: String,
    namespace: Option<String>,
) -> Result<SchemaNode, SchemaError> {
    let fingerprint = Fingerprint::Descriptor(TypeDescriptor::Variants(hierarchy.clone()));
    if let Some(reference) = ctx.register_named(&name, namespace.as_deref(), fingerprint)? {
        return Ok(reference);
    }

    let symbols = hierarchy
        .variants
        .iter()
        .map(|v| v.resolved_label().to_string())
        .collect();

    let mut e = EnumSchema::new(name, symbols);
    e.namespace = namespace;
    e.doc = hierarchy.annotations.doc.clone();
    e.aliases = hierarchy.annotations.aliases.clone();
    e.properties = hierarchy.annotations.properties.clone();
    Ok(SchemaNode::Enum(e))
}

/// A singleton variant inside a union-encoded hierarchy becomes a zero-field
/// record named after the variant, in the hierarchy's namespace.
fn derive_unit_variant(
    ctx: &mut DeriveContext<'_>,
    label: &str,
    namespace: Option<&str>,
) -> Result<SchemaNode, SchemaError> {
    if let Some(reference) = ctx.register_named(label, namespace, Fingerprint::UnitVariant)? {
        return Ok(reference);
    }
    let mut record = RecordSchema::new(label, vec![]);
    record.namespace = namespace.map(str::to_string);
    Ok(SchemaNode::Record(record))
}
