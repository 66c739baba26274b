//! Default-value encoding against a field schema.
//!
//! This is the engine-side half of the value-encoding collaborator: it takes
//! a default value the front end has already reduced to JSON and normalizes
//! it against the field's schema so the emitted `default` attribute is valid
//! for an Avro reader. The collaborator contract assumes totality for any
//! value that is a valid instance of the declared type, so values the
//! normalizer does not recognize pass through unchanged.

use serde_json::Value;

use crate::schema::SchemaNode;

/// Encode a concrete default value against the given field schema.
pub fn encode_default(value: &Value, schema: &SchemaNode) -> Value {
    match schema {
        // Avro union defaults are written in the plain form of the matching
        // branch, so encoding recurses into that branch.
        SchemaNode::Union(members) => members
            .iter()
            .find(|m| branch_accepts(m, value))
            .map(|m| encode_default(value, m))
            .unwrap_or_else(|| value.clone()),

        SchemaNode::Array(items) => match value {
            Value::Array(elements) => Value::Array(
                elements.iter().map(|e| encode_default(e, items)).collect(),
            ),
            other => other.clone(),
        },

        SchemaNode::Map(values) => match value {
            Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), encode_default(v, values)))
                    .collect(),
            ),
            other => other.clone(),
        },

        _ => value.clone(),
    }
}

/// Whether a union branch accepts the given JSON value.
fn branch_accepts(schema: &SchemaNode, value: &Value) -> bool {
    use crate::schema::Primitive;

    match (schema, value) {
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
            branch_accepts(&SchemaNode::Primitive(*base), value)
        }
        (SchemaNode::Enum(_) | SchemaNode::Fixed(_), Value::String(_)) => true,
        (SchemaNode::Array(_), Value::Array(_)) => true,
        (SchemaNode::Map(_) | SchemaNode::Record(_) | SchemaNode::Ref { .. }, Value::Object(_)) => {
            true
        }
        _ => false,
    }
}
