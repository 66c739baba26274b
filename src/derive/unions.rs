//! Union construction and ordering.
//!
//! Avro unions carry two structural constraints the engine must uphold:
//! unions may not nest (a member that is itself a union must have its members
//! spliced in), and the member matching a field's default value must be
//! listed first. Both are handled here.

use serde_json::Value;

use crate::error::SchemaError;
use crate::ir::FieldDefault;
use crate::schema::{Primitive, SchemaNode};

/// Build a union from candidate member schemas.
///
/// Members that are themselves unions are spliced in rather than nested.
/// Duplicate members after splicing (same Avro union key) are an error.
pub fn build_union(
    candidates: Vec<SchemaNode>,
    context: &str,
) -> Result<SchemaNode, SchemaError> {
    let mut members: Vec<SchemaNode> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match candidate {
            SchemaNode::Union(inner) => members.extend(inner),
            other => members.push(other),
        }
    }

    let mut seen: Vec<String> = Vec::with_capacity(members.len());
    for member in &members {
        let key = union_key(member);
        if seen.contains(&key) {
            return Err(SchemaError::DuplicateUnionMember {
                key,
                context: context.to_string(),
            });
        }
        seen.push(key);
    }

    Ok(SchemaNode::Union(members))
}

/// Reorder union members so the branch matching the default comes first.
///
/// With no default, or an explicitly-null default, a null member (if any)
/// moves to the head. With a concrete default, the member matching the
/// default's resolved type moves to the head. All other members keep their
/// relative order. Non-union schemas pass through unchanged.
pub fn order_union(schema: SchemaNode, default: Option<&FieldDefault>) -> SchemaNode {
    let SchemaNode::Union(members) = schema else {
        return schema;
    };

    let head = match default {
        None | Some(FieldDefault::Null) => members.iter().position(SchemaNode::is_null),
        Some(FieldDefault::Value(value)) => {
            members.iter().position(|m| matches_value(m, value))
        }
    };

    match head {
        Some(0) | None => SchemaNode::Union(members),
        Some(index) => {
            let mut reordered = members;
            let member = reordered.remove(index);
            reordered.insert(0, member);
            SchemaNode::Union(reordered)
        }
    }
}

/// The key under which a member counts as a duplicate inside a union.
///
/// Avro forbids two members of the same unnamed type in one union, while
/// named types are distinguished by fullname. Logical annotations do not
/// create distinct union members; they resolve to their base primitive.
pub fn union_key(node: &SchemaNode) -> String {
    match node {
        SchemaNode::Primitive(p) => p.type_name().to_string(),
        SchemaNode::Logical { base, .. } => base.type_name().to_string(),
        SchemaNode::Array(_) => "array".to_string(),
        SchemaNode::Map(_) => "map".to_string(),
        SchemaNode::Union(_) => "union".to_string(),
        other => other.fullname().unwrap_or_else(|| "union".to_string()),
    }
}

/// Check whether a JSON default value resolves to the given member's type.
fn matches_value(node: &SchemaNode, value: &Value) -> bool {
    match (node, value) {
        (SchemaNode::Primitive(Primitive::Null), Value::Null) => true,
        (SchemaNode::Primitive(Primitive::Boolean), Value::Bool(_)) => true,
        (
            SchemaNode::Primitive(
                Primitive::Int | Primitive::Long | Primitive::Float | Primitive::Double,
            ),
            Value::Number(_),
        ) => true,
        (SchemaNode::Primitive(Primitive::String | Primitive::Bytes), Value::String(_)) => true,
        (SchemaNode::Logical { base, .. }, _) => {
            matches_value(&SchemaNode::Primitive(*base), value)
        }
        (SchemaNode::Enum(_) | SchemaNode::Fixed(_), Value::String(_)) => true,
        (SchemaNode::Array(_), Value::Array(_)) => true,
        (SchemaNode::Map(_) | SchemaNode::Record(_) | SchemaNode::Ref { .. }, Value::Object(_)) => {
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RecordSchema;
    use serde_json::json;

    fn string_node() -> SchemaNode {
        SchemaNode::Primitive(Primitive::String)
    }

    fn int_node() -> SchemaNode {
        SchemaNode::Primitive(Primitive::Int)
    }

    #[test]
    fn test_build_union_plain() {
        let union = build_union(vec![string_node(), int_node()], "test").unwrap();
        assert_eq!(union, SchemaNode::Union(vec![string_node(), int_node()]));
    }

    #[test]
    fn test_build_union_splices_nested() {
        let nested = SchemaNode::Union(vec![SchemaNode::null(), string_node()]);
        let union = build_union(vec![nested, int_node()], "test").unwrap();
        assert_eq!(
            union,
            SchemaNode::Union(vec![SchemaNode::null(), string_node(), int_node()])
        );
    }

    #[test]
    fn test_build_union_rejects_duplicates() {
        let err = build_union(vec![string_node(), string_node()], "Either").unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateUnionMember {
                key: "string".to_string(),
                context: "Either".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_detected_after_splice() {
        let nested = SchemaNode::Union(vec![SchemaNode::null(), string_node()]);
        let err = build_union(vec![nested, string_node()], "test").unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateUnionMember { .. }));
    }

    #[test]
    fn test_logical_collides_with_base() {
        let uuid = SchemaNode::Logical {
            base: Primitive::String,
            logical: crate::schema::LogicalType::Uuid,
        };
        let err = build_union(vec![uuid, string_node()], "test").unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateUnionMember { .. }));
    }

    #[test]
    fn test_named_members_distinguished_by_fullname() {
        let a = SchemaNode::Record(RecordSchema::new("A", vec![]));
        let b = SchemaNode::Record(RecordSchema::new("B", vec![]));
        assert!(build_union(vec![a, b], "test").is_ok());
    }

    #[test]
    fn test_order_no_default_moves_null_to_head() {
        let union = SchemaNode::Union(vec![string_node(), SchemaNode::null()]);
        let ordered = order_union(union, None);
        assert_eq!(
            ordered,
            SchemaNode::Union(vec![SchemaNode::null(), string_node()])
        );
    }

    #[test]
    fn test_order_null_default_moves_null_to_head() {
        let union = SchemaNode::Union(vec![string_node(), SchemaNode::null()]);
        let ordered = order_union(union, Some(&FieldDefault::Null));
        assert_eq!(
            ordered,
            SchemaNode::Union(vec![SchemaNode::null(), string_node()])
        );
    }

    #[test]
    fn test_order_concrete_default_moves_match_to_head() {
        let union = SchemaNode::Union(vec![SchemaNode::null(), string_node(), int_node()]);
        let default = FieldDefault::Value(json!(42));
        let ordered = order_union(union, Some(&default));
        assert_eq!(
            ordered,
            SchemaNode::Union(vec![int_node(), SchemaNode::null(), string_node()])
        );
    }

    #[test]
    fn test_order_preserves_relative_order_of_rest() {
        let boolean = SchemaNode::Primitive(Primitive::Boolean);
        let union = SchemaNode::Union(vec![
            string_node(),
            boolean.clone(),
            SchemaNode::null(),
            int_node(),
        ]);
        let ordered = order_union(union, None);
        assert_eq!(
            ordered,
            SchemaNode::Union(vec![SchemaNode::null(), string_node(), boolean, int_node()])
        );
    }

    #[test]
    fn test_order_without_null_member_is_unchanged() {
        let union = SchemaNode::Union(vec![string_node(), int_node()]);
        let ordered = order_union(union.clone(), None);
        assert_eq!(ordered, union);
    }

    #[test]
    fn test_order_unmatched_default_is_unchanged() {
        let union = SchemaNode::Union(vec![SchemaNode::null(), string_node()]);
        let default = FieldDefault::Value(json!(true));
        let ordered = order_union(union.clone(), Some(&default));
        assert_eq!(ordered, union);
    }

    #[test]
    fn test_order_passes_non_union_through() {
        let ordered = order_union(string_node(), Some(&FieldDefault::Null));
        assert_eq!(ordered, string_node());
    }
}
