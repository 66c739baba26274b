//! Intermediate representation consumed by the derivation engine.
//!
//! This module contains:
//! - Type descriptors (the structural shape of a host type)
//! - Annotation sets (resolved directives for types, fields, and variants)

pub mod annotations;
pub mod types;

pub use annotations::Annotations;
pub use types::{
    ContainerDescriptor, FieldDefault, FieldDescriptor, PrimitiveKind, ProductDescriptor,
    TypeDescriptor, VariantDescriptor, VariantShape, VariantsDescriptor,
};
