//! Record and wrapper composition.
//!
//! General products assemble a named record from their composed fields,
//! preserving declaration order. Single-field transparent wrappers elide to
//! their inner field's schema, or to a fixed schema when the type carries a
//! fixed-size override.

use crate::error::SchemaError;
use crate::ir::ProductDescriptor;
use crate::schema::{FixedSchema, RecordSchema, SchemaNode};

use super::{fields, DeriveContext, Fingerprint};
use crate::ir::TypeDescriptor;

/// Derive the schema for a product type.
pub fn derive_product(
    ctx: &mut DeriveContext<'_>,
    product: &ProductDescriptor,
) -> Result<SchemaNode, SchemaError> {
    let name = ctx
        .resolve_type_name(&product.name, product.annotations.rename.as_deref())
        .to_string();
    let namespace = product
        .annotations
        .namespace
        .clone()
        .or_else(|| product.namespace.clone());

    if product.wrapper {
        return derive_wrapper(ctx, product, &name, namespace.as_deref());
    }

    let fingerprint = Fingerprint::Descriptor(TypeDescriptor::Product(product.clone()));
    if let Some(reference) = ctx.register_named(&name, namespace.as_deref(), fingerprint)? {
        return Ok(reference);
    }

    let mut composed = Vec::with_capacity(product.fields.len());
    for field in &product.fields {
        composed.push(fields::compose_field(ctx, namespace.as_deref(), field)?);
    }

    let mut record = RecordSchema::new(name, composed);
    record.namespace = namespace;
    record.doc = product.annotations.doc.clone();
    record.aliases = product.annotations.aliases.clone();
    record.properties = product.annotations.properties.clone();
    Ok(SchemaNode::Record(record))
}

/// Transparent wrappers have exactly one field. With a type-level fixed-size
/// override the wrapper derives to a fixed schema named after the type and
/// the inner field is ignored; otherwise the wrapper's schema is the inner
/// field's schema, with no record around it.
fn derive_wrapper(
    ctx: &mut DeriveContext<'_>,
    product: &ProductDescriptor,
    name: &str,
    namespace: Option<&str>,
) -> Result<SchemaNode, SchemaError> {
    if product.fields.len() != 1 {
        return Err(SchemaError::MalformedWrapper {
            name: product.name.clone(),
            field_count: product.fields.len(),
        });
    }

    if let Some(size) = product.annotations.fixed_size {
        if let Some(reference) = ctx.register_named(name, namespace, Fingerprint::Fixed(size))? {
            return Ok(reference);
        }
        let mut fixed = FixedSchema::new(name, size);
        fixed.namespace = namespace.map(str::to_string);
        fixed.aliases = product.annotations.aliases.clone();
        return Ok(SchemaNode::Fixed(fixed));
    }

    let inner = fields::compose_field(ctx, namespace, &product.fields[0])?;
    Ok(inner.schema)
}
