//! Avro schema tree.
//!
//! [`SchemaNode`] is the engine's output: an immutable tree whose JSON form
//! follows the Avro schema grammar. Nodes are constructed bottom-up and never
//! mutated after being returned; transformations such as namespace rewriting
//! always produce new nodes.
//!
//! # JSON shapes
//!
//! | Node | JSON |
//! |------|------|
//! | primitive | `"string"`, `"int"`, ... |
//! | logical | `{"type": "string", "logicalType": "uuid"}` |
//! | decimal | `{"type": "bytes", "logicalType": "decimal", "precision": P, "scale": S}` |
//! | record | `{"type": "record", "name": ..., "fields": [...]}` |
//! | enum | `{"type": "enum", "name": ..., "symbols": [...]}` |
//! | fixed | `{"type": "fixed", "name": ..., "size": N}` |
//! | array | `{"type": "array", "items": ...}` |
//! | map | `{"type": "map", "values": ...}` |
//! | union | `[member, member, ...]` |
//! | reference | `"namespace.Name"` |

use serde::ser::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Base primitive shapes of the Avro type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// The null type.
    Null,
    /// Boolean.
    Boolean,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Byte sequence.
    Bytes,
    /// UTF-8 string.
    String,
}

impl Primitive {
    /// The Avro type name of this primitive.
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Boolean => "boolean",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Bytes => "bytes",
            Primitive::String => "string",
        }
    }
}

/// Logical type annotations over a base primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    /// RFC 4122 identifier over `string`.
    Uuid,
    /// Days since the epoch over `int`.
    Date,
    /// Milliseconds after midnight over `int`.
    TimeMillis,
    /// Milliseconds since the epoch over `long`.
    TimestampMillis,
    /// Microseconds since the epoch over `long`.
    TimestampMicros,
    /// Arbitrary-precision decimal over `bytes`.
    Decimal {
        /// Total significant digits.
        precision: u32,
        /// Digits right of the decimal point.
        scale: u32,
    },
}

impl LogicalType {
    /// The Avro `logicalType` attribute value.
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Uuid => "uuid",
            LogicalType::Date => "date",
            LogicalType::TimeMillis => "time-millis",
            LogicalType::TimestampMillis => "timestamp-millis",
            LogicalType::TimestampMicros => "timestamp-micros",
            LogicalType::Decimal { .. } => "decimal",
        }
    }
}

/// One node of an Avro schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A bare primitive.
    Primitive(Primitive),

    /// A primitive carrying a logical-type annotation.
    Logical {
        /// The underlying primitive shape.
        base: Primitive,
        /// The logical annotation.
        logical: LogicalType,
    },

    /// A named record with ordered fields.
    Record(RecordSchema),

    /// A named enum with ordered symbols.
    Enum(EnumSchema),

    /// A named fixed-size byte array.
    Fixed(FixedSchema),

    /// A homogeneous array.
    Array(Box<SchemaNode>),

    /// A string-keyed map.
    Map(Box<SchemaNode>),

    /// A union with semantically significant member order.
    Union(Vec<SchemaNode>),

    /// A by-name reference to a previously emitted named schema. Used for
    /// recursive types and repeated occurrences of the same named node.
    Ref {
        /// Referenced schema name.
        name: String,
        /// Referenced schema namespace.
        namespace: Option<String>,
    },
}

impl SchemaNode {
    /// Shorthand for the null schema.
    pub fn null() -> Self {
        SchemaNode::Primitive(Primitive::Null)
    }

    /// Check whether this node is the null schema.
    pub fn is_null(&self) -> bool {
        matches!(self, SchemaNode::Primitive(Primitive::Null))
    }

    /// The fullname of a named node, if this node is named.
    pub fn fullname(&self) -> Option<String> {
        match self {
            SchemaNode::Record(r) => Some(fullname(&r.name, r.namespace.as_deref())),
            SchemaNode::Enum(e) => Some(fullname(&e.name, e.namespace.as_deref())),
            SchemaNode::Fixed(f) => Some(fullname(&f.name, f.namespace.as_deref())),
            SchemaNode::Ref { name, namespace } => Some(fullname(name, namespace.as_deref())),
            _ => None,
        }
    }

    /// Render the node as an Avro schema JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            SchemaNode::Primitive(p) => Value::String(p.type_name().to_string()),

            SchemaNode::Logical { base, logical } => {
                let mut obj = Map::new();
                obj.insert("type".into(), json!(base.type_name()));
                obj.insert("logicalType".into(), json!(logical.name()));
                if let LogicalType::Decimal { precision, scale } = logical {
                    obj.insert("precision".into(), json!(precision));
                    obj.insert("scale".into(), json!(scale));
                }
                Value::Object(obj)
            }

            SchemaNode::Record(record) => record.to_json(),
            SchemaNode::Enum(e) => e.to_json(),
            SchemaNode::Fixed(f) => f.to_json(),

            SchemaNode::Array(items) => json!({
                "type": "array",
                "items": items.to_json(),
            }),

            SchemaNode::Map(values) => json!({
                "type": "map",
                "values": values.to_json(),
            }),

            SchemaNode::Union(members) => {
                Value::Array(members.iter().map(SchemaNode::to_json).collect())
            }

            SchemaNode::Ref { name, namespace } => {
                Value::String(fullname(name, namespace.as_deref()))
            }
        }
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Compose a fullname from a name and optional namespace.
pub fn fullname(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => format!("{}.{}", ns, name),
        _ => name.to_string(),
    }
}

/// A named record schema.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Record name.
    pub name: String,

    /// Record namespace.
    pub namespace: Option<String>,

    /// Documentation text.
    pub doc: Option<String>,

    /// Alternate names.
    pub aliases: Vec<String>,

    /// Custom properties, in insertion order.
    pub properties: Vec<(String, Value)>,

    /// Fields in declaration order. The order is observable in the wire
    /// schema and must be stable.
    pub fields: Vec<FieldNode>,
}

impl RecordSchema {
    /// Create a record schema with the given name and fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldNode>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            doc: None,
            aliases: Vec::new(),
            properties: Vec::new(),
            fields,
        }
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set aliases.
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Set custom properties.
    pub fn with_properties(mut self, properties: Vec<(String, Value)>) -> Self {
        self.properties = properties;
        self
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), json!("record"));
        obj.insert("name".into(), json!(self.name));
        if let Some(ns) = &self.namespace {
            obj.insert("namespace".into(), json!(ns));
        }
        if let Some(doc) = &self.doc {
            obj.insert("doc".into(), json!(doc));
        }
        if !self.aliases.is_empty() {
            obj.insert("aliases".into(), json!(self.aliases));
        }
        obj.insert(
            "fields".into(),
            Value::Array(self.fields.iter().map(FieldNode::to_json).collect()),
        );
        for (key, value) in &self.properties {
            obj.insert(key.clone(), value.clone());
        }
        Value::Object(obj)
    }
}

/// One field of a record schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    /// Encoded field name.
    pub name: String,

    /// Field schema.
    pub schema: SchemaNode,

    /// Documentation text.
    pub doc: Option<String>,

    /// Alternate names.
    pub aliases: Vec<String>,

    /// Custom properties, in insertion order.
    pub properties: Vec<(String, Value)>,

    /// Encoded default. `None` means no default; `Some(Value::Null)` is the
    /// defined-but-null default.
    pub default: Option<Value>,
}

impl FieldNode {
    /// Create a field node with the given name and schema.
    pub fn new(name: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            schema,
            doc: None,
            aliases: Vec::new(),
            properties: Vec::new(),
            default: None,
        }
    }

    /// Set documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set an encoded default.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".into(), json!(self.name));
        obj.insert("type".into(), self.schema.to_json());
        if let Some(doc) = &self.doc {
            obj.insert("doc".into(), json!(doc));
        }
        if let Some(default) = &self.default {
            obj.insert("default".into(), default.clone());
        }
        if !self.aliases.is_empty() {
            obj.insert("aliases".into(), json!(self.aliases));
        }
        for (key, value) in &self.properties {
            obj.insert(key.clone(), value.clone());
        }
        Value::Object(obj)
    }
}

/// A named enum schema.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    /// Enum name.
    pub name: String,

    /// Enum namespace.
    pub namespace: Option<String>,

    /// Documentation text.
    pub doc: Option<String>,

    /// Alternate names.
    pub aliases: Vec<String>,

    /// Custom properties, in insertion order.
    pub properties: Vec<(String, Value)>,

    /// Symbols in declaration order.
    pub symbols: Vec<String>,
}

impl EnumSchema {
    /// Create an enum schema with the given name and symbols.
    pub fn new(name: impl Into<String>, symbols: Vec<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            doc: None,
            aliases: Vec::new(),
            properties: Vec::new(),
            symbols,
        }
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), json!("enum"));
        obj.insert("name".into(), json!(self.name));
        if let Some(ns) = &self.namespace {
            obj.insert("namespace".into(), json!(ns));
        }
        if let Some(doc) = &self.doc {
            obj.insert("doc".into(), json!(doc));
        }
        if !self.aliases.is_empty() {
            obj.insert("aliases".into(), json!(self.aliases));
        }
        obj.insert("symbols".into(), json!(self.symbols));
        for (key, value) in &self.properties {
            obj.insert(key.clone(), value.clone());
        }
        Value::Object(obj)
    }
}

/// A named fixed-size byte array schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSchema {
    /// Fixed name.
    pub name: String,

    /// Fixed namespace.
    pub namespace: Option<String>,

    /// Alternate names.
    pub aliases: Vec<String>,

    /// Size in bytes.
    pub size: usize,
}

impl FixedSchema {
    /// Create a fixed schema with the given name and size.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            aliases: Vec::new(),
            size,
        }
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), json!("fixed"));
        obj.insert("name".into(), json!(self.name));
        if let Some(ns) = &self.namespace {
            obj.insert("namespace".into(), json!(ns));
        }
        if !self.aliases.is_empty() {
            obj.insert("aliases".into(), json!(self.aliases));
        }
        obj.insert("size".into(), json!(self.size));
        Value::Object(obj)
    }
}
