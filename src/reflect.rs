//! The [`AvroTyped`] trait: structural reflection for Rust types.
//!
//! Types that implement [`AvroTyped`] describe their own structure as a
//! [`TypeDescriptor`], which the engine then turns into an Avro schema. The
//! implementations here cover the std surface; domain types implement the
//! trait by assembling a [`ProductDescriptor`](crate::ir::ProductDescriptor)
//! or [`VariantsDescriptor`](crate::ir::VariantsDescriptor) by hand.
//!
//! ## Built-in implementations
//!
//! - **Primitives**: `String`, `&str`, `bool`, integers (`i8`-`i64`,
//!   `u8`-`u32`), floats (`f32`, `f64`), `Vec<u8>` via wrapper types
//! - **Collections**: `Option<T>`, `Vec<T>`, `HashSet<T>`, `BTreeSet<T>`,
//!   `HashMap<String, V>`, `BTreeMap<String, V>`
//! - **Tuples**: arity 2 through 5
//! - **Feature-gated**: `Uuid` (uuid feature), `DateTime<Tz>` and
//!   `NaiveDate` (chrono feature)
//!
//! Unsigned 64-bit integers have no lossless Avro encoding and deliberately
//! have no implementation.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::config::DeriveConfig;
use crate::error::SchemaError;
use crate::ir::{PrimitiveKind, TypeDescriptor};
use crate::schema::SchemaNode;

/// Trait for types that can describe their own Avro structure.
///
/// # Example
///
/// ```rust
/// use avroforge::reflect::AvroTyped;
/// use avroforge::ir::{FieldDescriptor, ProductDescriptor, TypeDescriptor};
///
/// struct User {
///     name: String,
///     age: i32,
/// }
///
/// impl AvroTyped for User {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::Product(
///             ProductDescriptor::new(
///                 "User",
///                 vec![
///                     FieldDescriptor::new("name", String::descriptor()),
///                     FieldDescriptor::new("age", i32::descriptor()),
///                 ],
///             )
///             .with_namespace("app"),
///         )
///     }
/// }
///
/// let schema = User::schema().unwrap();
/// assert_eq!(schema.fullname().as_deref(), Some("app.User"));
/// ```
pub trait AvroTyped {
    /// The structural descriptor for this type.
    fn descriptor() -> TypeDescriptor;

    /// Derive the Avro schema for this type with the default configuration.
    fn schema() -> Result<SchemaNode, SchemaError> {
        Self::schema_with(&DeriveConfig::default())
    }

    /// Derive the Avro schema for this type with an explicit configuration.
    fn schema_with(config: &DeriveConfig) -> Result<SchemaNode, SchemaError> {
        crate::derive::derive_schema(&Self::descriptor(), config)
    }
}

// =============================================================================
// Primitive implementations
// =============================================================================

macro_rules! impl_avro_typed_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl AvroTyped for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::primitive(PrimitiveKind::$kind)
                }
            }
        )*
    };
}

impl_avro_typed_primitive!(
    String => Text,
    bool => Boolean,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Int16,
    u16 => Int32,
    u32 => Int64,
    f32 => Float32,
    f64 => Float64,
);

impl AvroTyped for &str {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::Text)
    }
}

// =============================================================================
// Compound type implementations
// =============================================================================

impl<T: AvroTyped> AvroTyped for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::optional(T::descriptor())
    }
}

impl<T: AvroTyped> AvroTyped for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::descriptor())
    }
}

impl<T: AvroTyped> AvroTyped for HashSet<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::descriptor())
    }
}

impl<T: AvroTyped + Ord> AvroTyped for BTreeSet<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence(T::descriptor())
    }
}

impl<V: AvroTyped> AvroTyped for HashMap<String, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::mapping(String::descriptor(), V::descriptor())
    }
}

impl<V: AvroTyped> AvroTyped for BTreeMap<String, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::mapping(String::descriptor(), V::descriptor())
    }
}

macro_rules! impl_avro_typed_tuple {
    ($($($ty:ident)+;)*) => {
        $(
            impl<$($ty: AvroTyped),+> AvroTyped for ($($ty,)+) {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::tuple(vec![$($ty::descriptor()),+])
                }
            }
        )*
    };
}

impl_avro_typed_tuple!(
    A B;
    A B C;
    A B C D;
    A B C D E;
);

// =============================================================================
// Feature-gated implementations
// =============================================================================

#[cfg(feature = "uuid")]
impl AvroTyped for uuid::Uuid {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::Uuid)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> AvroTyped for chrono::DateTime<Tz> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::TimestampMillis)
    }
}

#[cfg(feature = "chrono")]
impl AvroTyped for chrono::NaiveDate {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::Date)
    }
}

#[cfg(feature = "chrono")]
impl AvroTyped for chrono::NaiveTime {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::TimeMillis)
    }
}

// =============================================================================
// Tests
// =============================================================================
