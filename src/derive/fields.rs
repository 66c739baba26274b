//! Field composition.
//!
//! For one structural field: resolve the encoded name, build or override the
//! schema, encode the default against it, normalize union order, apply a
//! per-field namespace override, and attach documentation, aliases, and
//! custom properties.

use serde_json::Value;

use crate::error::SchemaError;
use crate::ir::{FieldDefault, FieldDescriptor};
use crate::schema::{FieldNode, FixedSchema, SchemaNode};
use crate::value::encode_default;

use super::{namespace, unions, DeriveContext, Fingerprint};

/// Compose one field of a record.
///
/// `enclosing_ns` is the namespace of the record being assembled; a
/// fixed-size override produces a fixed schema in that namespace, named after
/// the encoded field name.
pub fn compose_field(
    ctx: &mut DeriveContext<'_>,
    enclosing_ns: Option<&str>,
    field: &FieldDescriptor,
) -> Result<FieldNode, SchemaError> {
    let encoded_name = match &field.annotations.rename {
        Some(rename) => rename.clone(),
        None => ctx.config.naming.apply(&field.label),
    };

    // A fixed-size override replaces the element schema entirely. This is
    // deliberately permissive: the override wins even over container-shaped
    // elements.
    let schema = match field.annotations.fixed_size {
        Some(size) => {
            match ctx.register_named(&encoded_name, enclosing_ns, Fingerprint::Fixed(size))? {
                Some(reference) => reference,
                None => {
                    let mut fixed = FixedSchema::new(encoded_name.clone(), size);
                    fixed.namespace = enclosing_ns.map(str::to_string);
                    SchemaNode::Fixed(fixed)
                }
            }
        }
        None => ctx.derive(&field.ty)?,
    };

    let encoded_default = match &field.default {
        None => None,
        Some(FieldDefault::Null) => Some(FieldDefault::Null),
        Some(FieldDefault::Value(value)) => {
            Some(FieldDefault::Value(encode_default(value, &schema)))
        }
    };

    let schema = unions::order_union(schema, encoded_default.as_ref());

    let schema = match &field.annotations.namespace {
        Some(ns) => namespace::rewrite(&schema, ns),
        None => schema,
    };

    Ok(FieldNode {
        name: encoded_name,
        schema,
        doc: field.annotations.doc.clone(),
        aliases: field.annotations.aliases.clone(),
        properties: field.annotations.properties.clone(),
        default: encoded_default.map(|d| match d {
            FieldDefault::Null => Value::Null,
            FieldDefault::Value(value) => value,
        }),
    })
}
