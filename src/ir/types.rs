//! Type descriptor definitions.
//!
//! Descriptors are the engine's only input: a structural description of a
//! host type produced by a front end (a derive macro, a runtime registry such
//! as [`crate::reflect::AvroTyped`], or hand-written construction in tests).
//! The engine never inspects host-language reflection facilities itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::annotations::Annotations;

/// Well-known value kinds with a fixed schema mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveKind {
    /// Text / string values.
    Text,

    /// Boolean values.
    Boolean,

    /// 8-bit signed integer (widens to `int`).
    Int8,

    /// 16-bit signed integer (widens to `int`).
    Int16,

    /// 32-bit signed integer.
    Int32,

    /// 64-bit signed integer.
    Int64,

    /// 32-bit floating point.
    Float32,

    /// 64-bit floating point.
    Float64,

    /// Raw byte sequence.
    Bytes,

    /// Unique identifier, tagged with the `uuid` logical type.
    Uuid,

    /// High-precision decimal, tagged with the `decimal` logical type and
    /// parameterized by the ambient precision/scale configuration.
    Decimal,

    /// Calendar date, tagged with the `date` logical type.
    Date,

    /// Time of day in milliseconds, tagged with `time-millis`.
    TimeMillis,

    /// Instant in milliseconds, tagged with `timestamp-millis`.
    TimestampMillis,

    /// Instant in microseconds, tagged with `timestamp-micros`.
    TimestampMicros,
}

/// Structural description of one host type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeDescriptor {
    /// A primitive or well-known value kind.
    Primitive {
        /// The primitive kind.
        primitive: PrimitiveKind,
    },

    /// A product of named fields (struct-like).
    Product(ProductDescriptor),

    /// A closed set of variants (enum-like).
    Variants(VariantsDescriptor),

    /// A container wrapping one or more element types.
    Container(ContainerDescriptor),

    /// A by-name reference to a named type described elsewhere in the same
    /// document. This is how the front end expresses recursive or shared
    /// types without an infinite descriptor tree.
    Reference {
        /// Referenced type name.
        name: String,
        /// Referenced type namespace.
        #[serde(skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
    },
}

impl TypeDescriptor {
    /// Shorthand for a primitive descriptor.
    pub fn primitive(primitive: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive { primitive }
    }

    /// Shorthand for an optional container.
    pub fn optional(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Container(ContainerDescriptor::Optional(Box::new(inner)))
    }

    /// Shorthand for a two-way ("either") container.
    pub fn either(left: TypeDescriptor, right: TypeDescriptor) -> Self {
        TypeDescriptor::Container(ContainerDescriptor::Either(
            Box::new(left),
            Box::new(right),
        ))
    }

    /// Shorthand for a homogeneous sequence container.
    pub fn sequence(element: TypeDescriptor) -> Self {
        TypeDescriptor::Container(ContainerDescriptor::Sequence(Box::new(element)))
    }

    /// Shorthand for a text-keyed mapping container.
    pub fn mapping(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Container(ContainerDescriptor::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// Shorthand for a fixed-arity tuple container.
    pub fn tuple(elements: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Container(ContainerDescriptor::Tuple(elements))
    }

    /// Shorthand for a by-name reference.
    pub fn reference(name: impl Into<String>, namespace: Option<&str>) -> Self {
        TypeDescriptor::Reference {
            name: name.into(),
            namespace: namespace.map(str::to_string),
        }
    }
}

/// Container shapes the engine knows how to compose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "kebab-case")]
pub enum ContainerDescriptor {
    /// An optional value: `[null, T]` in the produced schema.
    Optional(Box<TypeDescriptor>),

    /// Either of two values: a two-member union.
    Either(Box<TypeDescriptor>, Box<TypeDescriptor>),

    /// A homogeneous sequence, set, or array. Element order and uniqueness
    /// are not encoded; sets and lists are indistinguishable on the wire.
    Sequence(Box<TypeDescriptor>),

    /// A key-mapped collection. Keys must resolve to the text primitive;
    /// anything else is rejected as unsupported.
    Mapping {
        /// Key type descriptor.
        key: Box<TypeDescriptor>,
        /// Value type descriptor.
        value: Box<TypeDescriptor>,
    },

    /// A fixed-arity tuple, arity 2 through 5.
    Tuple(Vec<TypeDescriptor>),
}

/// A product type: named, namespaced, with ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    /// Declared type name.
    pub name: String,

    /// Declared namespace, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Type-level annotations.
    #[serde(default)]
    pub annotations: Annotations,

    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,

    /// Whether this product is a transparent single-field wrapper whose
    /// schema elides to its inner field's schema.
    #[serde(default)]
    pub wrapper: bool,
}

impl ProductDescriptor {
    /// Create a product descriptor with the given name and fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            annotations: Annotations::default(),
            fields,
            wrapper: false,
        }
    }

    /// Set the declared namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set type-level annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Mark as a transparent wrapper.
    pub fn with_wrapper(mut self, wrapper: bool) -> Self {
        self.wrapper = wrapper;
        self
    }
}

/// An explicit default supplied for one field.
///
/// `Null` is the defined-but-null marker: the field has a default and that
/// default is null. A field with no default at all simply carries `None` in
/// [`FieldDescriptor::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum FieldDefault {
    /// The default is explicitly null.
    Null,

    /// A concrete default value, already reduced to a schema-compatible
    /// JSON representation by the front end.
    Value(Value),
}

/// One structural field of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Raw field label as declared in the host type.
    pub label: String,

    /// Field-level annotations.
    #[serde(default)]
    pub annotations: Annotations,

    /// The field's element type.
    pub ty: Box<TypeDescriptor>,

    /// Default value, if the field declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,
}

impl FieldDescriptor {
    /// Create a field descriptor with the given label and type.
    pub fn new(label: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            label: label.into(),
            annotations: Annotations::default(),
            ty: Box::new(ty),
            default: None,
        }
    }

    /// Set field-level annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Set a concrete default value.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(FieldDefault::Value(value.into()));
        self
    }

    /// Set an explicitly-null default.
    pub fn with_null_default(mut self) -> Self {
        self.default = Some(FieldDefault::Null);
        self
    }
}

/// A closed set of variants: named, namespaced, ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantsDescriptor {
    /// Declared hierarchy name.
    pub name: String,

    /// Declared namespace, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Type-level annotations.
    #[serde(default)]
    pub annotations: Annotations,

    /// Variants in declaration order.
    pub variants: Vec<VariantDescriptor>,
}

impl VariantsDescriptor {
    /// Create a variants descriptor with the given name and variants.
    pub fn new(name: impl Into<String>, variants: Vec<VariantDescriptor>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            annotations: Annotations::default(),
            variants,
        }
    }

    /// Set the declared namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set type-level annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Check whether every variant is a parameterless singleton.
    pub fn is_unit_only(&self) -> bool {
        self.variants
            .iter()
            .all(|v| matches!(v.shape, VariantShape::Unit))
    }
}

/// One variant of a closed hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDescriptor {
    /// Raw variant label as declared.
    pub label: String,

    /// Variant-level annotations.
    #[serde(default)]
    pub annotations: Annotations,

    /// Whether the variant carries data. The front end supplies this
    /// explicitly; the engine never re-derives it structurally.
    pub shape: VariantShape,
}

impl VariantDescriptor {
    /// Create a parameterless singleton variant.
    pub fn unit(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            annotations: Annotations::default(),
            shape: VariantShape::Unit,
        }
    }

    /// Create a data-carrying variant.
    pub fn data(label: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            label: label.into(),
            annotations: Annotations::default(),
            shape: VariantShape::Data(Box::new(ty)),
        }
    }

    /// Set variant-level annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// The symbol or record name this variant resolves to: the rename
    /// override when present, else the raw label.
    pub fn resolved_label(&self) -> &str {
        self.annotations.rename.as_deref().unwrap_or(&self.label)
    }
}

/// Whether a variant carries data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type", rename_all = "kebab-case")]
pub enum VariantShape {
    /// A parameterless singleton.
    Unit,

    /// A variant carrying the described payload type.
    Data(Box<TypeDescriptor>),
}
