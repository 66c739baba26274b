//! Namespace rewriting.
//!
//! Structural recursion over a finished schema tree: every named node
//! (records, enums, fixed types, references) gets the new namespace, while
//! names, docs, aliases, and properties are left untouched. The rewrite is
//! idempotent and always produces new nodes.

use crate::schema::SchemaNode;

/// Rewrite every named node in the tree to the given namespace.
pub fn rewrite(node: &SchemaNode, namespace: &str) -> SchemaNode {
    match node {
        SchemaNode::Record(record) => {
            let mut record = record.clone();
            record.namespace = Some(namespace.to_string());
            record.fields = record
                .fields
                .into_iter()
                .map(|mut field| {
                    field.schema = rewrite(&field.schema, namespace);
                    field
                })
                .collect();
            SchemaNode::Record(record)
        }

        SchemaNode::Enum(e) => {
            let mut e = e.clone();
            e.namespace = Some(namespace.to_string());
            SchemaNode::Enum(e)
        }

        SchemaNode::Fixed(f) => {
            let mut f = f.clone();
            f.namespace = Some(namespace.to_string());
            SchemaNode::Fixed(f)
        }

        SchemaNode::Ref { name, .. } => SchemaNode::Ref {
            name: name.clone(),
            namespace: Some(namespace.to_string()),
        },

        SchemaNode::Array(items) => SchemaNode::Array(Box::new(rewrite(items, namespace))),
        SchemaNode::Map(values) => SchemaNode::Map(Box::new(rewrite(values, namespace))),

        SchemaNode::Union(members) => {
            SchemaNode::Union(members.iter().map(|m| rewrite(m, namespace)).collect())
        }

        // Primitive and logical nodes carry no namespace.
        other => other.clone(),
    }
}
