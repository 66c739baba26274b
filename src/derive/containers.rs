//! Container composition.
//!
//! Builds schema shapes for optionals, two-way sums, sequences, text-keyed
//! mappings, and fixed-arity tuples, recursing into element types through the
//! derive context.

use crate::error::SchemaError;
use crate::ir::{ContainerDescriptor, PrimitiveKind, TypeDescriptor};
use crate::schema::{FieldNode, RecordSchema, SchemaNode};

use super::{unions, DeriveContext, Fingerprint};

/// Reserved namespace for positionally named tuple records.
pub const TUPLE_NAMESPACE: &str = "avroforge.tuple";

/// Smallest supported tuple arity.
pub const TUPLE_MIN_ARITY: usize = 2;

/// Largest supported tuple arity.
pub const TUPLE_MAX_ARITY: usize = 5;

/// Derive the schema for one container shape.
pub fn derive_container(
    ctx: &mut DeriveContext<'_>,
    container: &ContainerDescriptor,
) -> Result<SchemaNode, SchemaError> {
    match container {
        ContainerDescriptor::Optional(inner) => derive_optional(ctx, inner),
        ContainerDescriptor::Either(left, right) => derive_either(ctx, left, right),
        ContainerDescriptor::Sequence(element) => {
            Ok(SchemaNode::Array(Box::new(ctx.derive(element)?)))
        }
        ContainerDescriptor::Mapping { key, value } => derive_mapping(ctx, key, value),
        ContainerDescriptor::Tuple(elements) => derive_tuple(ctx, container, elements),
    }
}

/// `Optional(T)` derives to `[null, schema(T)]`.
///
/// The null branch is forced to the head by the union normalizer; if `T`
/// itself derives to a union its members are spliced in first.
fn derive_optional(
    ctx: &mut DeriveContext<'_>,
    inner: &TypeDescriptor,
) -> Result<SchemaNode, SchemaError> {
    let element = ctx.derive(inner)?;
    let union = unions::build_union(vec![element, SchemaNode::null()], "Optional")?;
    Ok(unions::order_union(union, None))
}

/// `Either(A, B)` derives to a two-member union, spliced and checked the same
/// way as a closed-variant union.
fn derive_either(
    ctx: &mut DeriveContext<'_>,
    left: &TypeDescriptor,
    right: &TypeDescriptor,
) -> Result<SchemaNode, SchemaError> {
    let left = ctx.derive(left)?;
    let right = ctx.derive(right)?;
    unions::build_union(vec![left, right], "Either")
}

/// Text-keyed mappings derive to map schemas; any other key kind is
/// unsupported (not representable in the target format).
fn derive_mapping(
    ctx: &mut DeriveContext<'_>,
    key: &TypeDescriptor,
    value: &TypeDescriptor,
) -> Result<SchemaNode, SchemaError> {
    match key {
        TypeDescriptor::Primitive {
            primitive: PrimitiveKind::Text,
        } => Ok(SchemaNode::Map(Box::new(ctx.derive(value)?))),
        other => Err(SchemaError::unsupported(format!(
            "map keyed by {:?}; only text keys are representable",
            other
        ))),
    }
}

/// Tuples of arity 2 through 5 derive to positionally named records under the
/// reserved namespace, with fields `_1` through `_n` and no defaults.
fn derive_tuple(
    ctx: &mut DeriveContext<'_>,
    container: &ContainerDescriptor,
    elements: &[TypeDescriptor],
) -> Result<SchemaNode, SchemaError> {
    let arity = elements.len();
    if !(TUPLE_MIN_ARITY..=TUPLE_MAX_ARITY).contains(&arity) {
        return Err(SchemaError::unsupported(format!(
            "tuple of arity {} (supported range is {}..={})",
            arity, TUPLE_MIN_ARITY, TUPLE_MAX_ARITY
        )));
    }

    let name = format!("Tuple{}", arity);
    if let Some(reference) = ctx.register_named(
        &name,
        Some(TUPLE_NAMESPACE),
        Fingerprint::Tuple(container.clone()),
    )? {
        return Ok(reference);
    }

    let mut fields = Vec::with_capacity(arity);
    for (index, element) in elements.iter().enumerate() {
        let schema = ctx.derive(element)?;
        fields.push(FieldNode::new(format!("_{}", index + 1), schema));
    }

    Ok(SchemaNode::Record(
        RecordSchema::new(name, fields).with_namespace(TUPLE_NAMESPACE),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeriveConfig;
    use crate::schema::Primitive;
    use serde_json::json;

    fn derive(container: ContainerDescriptor) -> Result<SchemaNode, SchemaError> {
        let config = DeriveConfig::default();
        let mut ctx = DeriveContext::new(&config);
        derive_container(&mut ctx, &container)
    }

    fn text() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::Text)
    }

    fn int32() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::Int32)
    }

    #[test]
    fn test_optional_is_null_first_union() {
        let schema = derive(ContainerDescriptor::Optional(Box::new(text()))).unwrap();
        assert_eq!(schema.to_json(), json!(["null", "string"]));
    }

    #[test]
    fn test_optional_splices_inner_union() {
        let either = TypeDescriptor::either(text(), int32());
        let schema = derive(ContainerDescriptor::Optional(Box::new(either))).unwrap();
        assert_eq!(schema.to_json(), json!(["null", "string", "int"]));
    }

    #[test]
    fn test_either_keeps_declaration_order() {
        let schema = derive(ContainerDescriptor::Either(
            Box::new(text()),
            Box::new(int32()),
        ))
        .unwrap();
        assert_eq!(schema.to_json(), json!(["string", "int"]));
    }

    #[test]
    fn test_either_duplicate_is_error() {
        let err = derive(ContainerDescriptor::Either(
            Box::new(text()),
            Box::new(text()),
        ))
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateUnionMember { .. }));
    }

    #[test]
    fn test_sequence() {
        let schema = derive(ContainerDescriptor::Sequence(Box::new(int32()))).unwrap();
        assert_eq!(schema, SchemaNode::Array(Box::new(SchemaNode::Primitive(Primitive::Int))));
    }

    #[test]
    fn test_mapping_with_text_keys() {
        let schema = derive(ContainerDescriptor::Mapping {
            key: Box::new(text()),
            value: Box::new(int32()),
        })
        .unwrap();
        assert_eq!(schema.to_json(), json!({"type": "map", "values": "int"}));
    }

    #[test]
    fn test_mapping_with_non_text_keys_is_unsupported() {
        let err = derive(ContainerDescriptor::Mapping {
            key: Box::new(int32()),
            value: Box::new(text()),
        })
        .unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedShape(_)));
    }

    #[test]
    fn test_tuple_record_shape() {
        let schema = derive(ContainerDescriptor::Tuple(vec![text(), int32()])).unwrap();
        assert_eq!(
            schema.to_json(),
            json!({
                "type": "record",
                "name": "Tuple2",
                "namespace": TUPLE_NAMESPACE,
                "fields": [
                    {"name": "_1", "type": "string"},
                    {"name": "_2", "type": "int"},
                ],
            })
        );
    }

    #[test]
    fn test_tuple_arity_bounds() {
        let six = vec![text(), text(), text(), text(), text(), text()];
        assert!(matches!(
            derive(ContainerDescriptor::Tuple(six)).unwrap_err(),
            SchemaError::UnsupportedShape(_)
        ));
        assert!(matches!(
            derive(ContainerDescriptor::Tuple(vec![text()])).unwrap_err(),
            SchemaError::UnsupportedShape(_)
        ));
    }

    #[test]
    fn test_repeated_tuple_becomes_reference() {
        let config = DeriveConfig::default();
        let mut ctx = DeriveContext::new(&config);
        let tuple = ContainerDescriptor::Tuple(vec![text(), int32()]);

        let first = derive_container(&mut ctx, &tuple).unwrap();
        assert!(matches!(first, SchemaNode::Record(_)));

        let second = derive_container(&mut ctx, &tuple).unwrap();
        assert_eq!(
            second,
            SchemaNode::Ref {
                name: "Tuple2".to_string(),
                namespace: Some(TUPLE_NAMESPACE.to_string()),
            }
        );
    }

    #[test]
    fn test_conflicting_tuple_instantiations_collide() {
        let config = DeriveConfig::default();
        let mut ctx = DeriveContext::new(&config);

        derive_container(&mut ctx, &ContainerDescriptor::Tuple(vec![text(), int32()])).unwrap();
        let err = derive_container(&mut ctx, &ContainerDescriptor::Tuple(vec![int32(), text()]))
            .unwrap_err();
        assert!(matches!(err, SchemaError::NameCollision { .. }));
    }
}
