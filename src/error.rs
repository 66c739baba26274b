//! Error types for schema derivation.

use thiserror::Error;

/// Errors produced while deriving a schema.
///
/// All of these are terminal for the derivation that raised them: no partial
/// schema is ever returned. They signal schema-design mistakes, not transient
/// conditions, so there is no retry surface.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    /// The descriptor has a shape the engine has no rule for, such as a
    /// map with non-text keys or a tuple outside the supported arity range.
    #[error("unsupported type shape: {0}")]
    UnsupportedShape(String),

    /// After splicing nested unions, two branches resolved to the same
    /// underlying Avro type.
    #[error("duplicate union member `{key}` in union for `{context}`")]
    DuplicateUnionMember {
        /// The resolved Avro type key that appeared twice.
        key: String,
        /// The type or field whose union was being built.
        context: String,
    },

    /// Two distinct named schemas resolved to the same (name, namespace)
    /// pair within one derivation.
    #[error("naming conflict: `{fullname}` is defined with two different shapes")]
    NameCollision {
        /// The colliding fullname (`namespace.name`).
        fullname: String,
    },

    /// A product carried the transparent-wrapper flag but does not have
    /// exactly one field.
    #[error("`{name}` is marked as a wrapper but has {field_count} fields")]
    MalformedWrapper {
        /// The offending product type name.
        name: String,
        /// How many fields it actually declares.
        field_count: usize,
    },
}

impl SchemaError {
    /// Shorthand for an [`SchemaError::UnsupportedShape`] with a formatted message.
    pub fn unsupported(what: impl Into<String>) -> Self {
        SchemaError::UnsupportedShape(what.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = SchemaError::unsupported("tuple of arity 7");
        assert_eq!(err.to_string(), "unsupported type shape: tuple of arity 7");
    }

    #[test]
    fn test_duplicate_union_member_display() {
        let err = SchemaError::DuplicateUnionMember {
            key: "string".to_string(),
            context: "Either".to_string(),
        };
        assert!(err.to_string().contains("duplicate union member `string`"));
    }

    #[test]
    fn test_name_collision_display() {
        let err = SchemaError::NameCollision {
            fullname: "com.example.User".to_string(),
        };
        assert!(err.to_string().contains("com.example.User"));
    }
}
