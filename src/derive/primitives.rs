//! Primitive and logical type table.
//!
//! Total and pure: every [`PrimitiveKind`] has exactly one fixed mapping, so
//! there is no failure path here. Narrow integer kinds widen to the nearest
//! supported Avro width; the widening is one-way and no narrowing check is
//! performed.

use crate::config::DecimalSettings;
use crate::ir::PrimitiveKind;
use crate::schema::{LogicalType, Primitive, SchemaNode};

/// Resolve a primitive kind to its schema node.
pub fn resolve(kind: PrimitiveKind, decimal: &DecimalSettings) -> SchemaNode {
    match kind {
        PrimitiveKind::Text => SchemaNode::Primitive(Primitive::String),
        PrimitiveKind::Boolean => SchemaNode::Primitive(Primitive::Boolean),

        // 8- and 16-bit integers widen to int.
        PrimitiveKind::Int8 | PrimitiveKind::Int16 | PrimitiveKind::Int32 => {
            SchemaNode::Primitive(Primitive::Int)
        }
        PrimitiveKind::Int64 => SchemaNode::Primitive(Primitive::Long),

        PrimitiveKind::Float32 => SchemaNode::Primitive(Primitive::Float),
        PrimitiveKind::Float64 => SchemaNode::Primitive(Primitive::Double),
        PrimitiveKind::Bytes => SchemaNode::Primitive(Primitive::Bytes),

        PrimitiveKind::Uuid => SchemaNode::Logical {
            base: Primitive::String,
            logical: LogicalType::Uuid,
        },

        PrimitiveKind::Decimal => SchemaNode::Logical {
            base: Primitive::Bytes,
            logical: LogicalType::Decimal {
                precision: decimal.precision,
                scale: decimal.scale,
            },
        },

        PrimitiveKind::Date => SchemaNode::Logical {
            base: Primitive::Int,
            logical: LogicalType::Date,
        },
        PrimitiveKind::TimeMillis => SchemaNode::Logical {
            base: Primitive::Int,
            logical: LogicalType::TimeMillis,
        },
        PrimitiveKind::TimestampMillis => SchemaNode::Logical {
            base: Primitive::Long,
            logical: LogicalType::TimestampMillis,
        },
        PrimitiveKind::TimestampMicros => SchemaNode::Logical {
            base: Primitive::Long,
            logical: LogicalType::TimestampMicros,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> DecimalSettings {
        DecimalSettings::default()
    }

    #[test]
    fn test_text_and_boolean() {
        assert_eq!(
            resolve(PrimitiveKind::Text, &settings()),
            SchemaNode::Primitive(Primitive::String)
        );
        assert_eq!(
            resolve(PrimitiveKind::Boolean, &settings()),
            SchemaNode::Primitive(Primitive::Boolean)
        );
    }

    #[test]
    fn test_narrow_integers_widen_to_int() {
        for kind in [
            PrimitiveKind::Int8,
            PrimitiveKind::Int16,
            PrimitiveKind::Int32,
        ] {
            assert_eq!(
                resolve(kind, &settings()),
                SchemaNode::Primitive(Primitive::Int)
            );
        }
        assert_eq!(
            resolve(PrimitiveKind::Int64, &settings()),
            SchemaNode::Primitive(Primitive::Long)
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(
            resolve(PrimitiveKind::Float32, &settings()),
            SchemaNode::Primitive(Primitive::Float)
        );
        assert_eq!(
            resolve(PrimitiveKind::Float64, &settings()),
            SchemaNode::Primitive(Primitive::Double)
        );
    }

    #[test]
    fn test_uuid_logical() {
        let node = resolve(PrimitiveKind::Uuid, &settings());
        assert_eq!(
            node.to_json(),
            json!({"type": "string", "logicalType": "uuid"})
        );
    }

    #[test]
    fn test_decimal_uses_ambient_settings() {
        let node = resolve(PrimitiveKind::Decimal, &DecimalSettings::new(10, 2));
        assert_eq!(
            node.to_json(),
            json!({"type": "bytes", "logicalType": "decimal", "precision": 10, "scale": 2})
        );

        // Defaults are (8, 2).
        let node = resolve(PrimitiveKind::Decimal, &settings());
        assert_eq!(
            node.to_json(),
            json!({"type": "bytes", "logicalType": "decimal", "precision": 8, "scale": 2})
        );
    }

    #[test]
    fn test_temporal_logicals() {
        assert_eq!(
            resolve(PrimitiveKind::Date, &settings()).to_json(),
            json!({"type": "int", "logicalType": "date"})
        );
        assert_eq!(
            resolve(PrimitiveKind::TimeMillis, &settings()).to_json(),
            json!({"type": "int", "logicalType": "time-millis"})
        );
        assert_eq!(
            resolve(PrimitiveKind::TimestampMillis, &settings()).to_json(),
            json!({"type": "long", "logicalType": "timestamp-millis"})
        );
        assert_eq!(
            resolve(PrimitiveKind::TimestampMicros, &settings()).to_json(),
            json!({"type": "long", "logicalType": "timestamp-micros"})
        );
    }
}
