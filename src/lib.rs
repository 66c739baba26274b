//! # avroforge
//!
//! A Rust crate for deriving [Apache Avro](https://avro.apache.org/) schemas
//! from structural type descriptions.
//!
//! This crate provides a descriptor IR, a derivation engine, and export
//! utilities. Types describe their structure as a [`TypeDescriptor`] tree
//! (usually through the [`AvroTyped`] trait), and the engine walks that tree
//! into a normalized [`SchemaNode`] that renders as a standard `.avsc`
//! document.
//!
//! ## Quick Start
//!
//! ```rust
//! use avroforge::ir::{FieldDescriptor, ProductDescriptor, TypeDescriptor};
//! use avroforge::reflect::AvroTyped;
//!
//! struct User {
//!     name: String,
//!     age: i32,
//!     email: Option<String>,
//! }
//!
//! impl AvroTyped for User {
//!     fn descriptor() -> TypeDescriptor {
//!         TypeDescriptor::Product(
//!             ProductDescriptor::new(
//!                 "User",
//!                 vec![
//!                     FieldDescriptor::new("name", String::descriptor()),
//!                     FieldDescriptor::new("age", i32::descriptor()),
//!                     FieldDescriptor::new("email", Option::<String>::descriptor())
//!                         .with_null_default(),
//!                 ],
//!             )
//!             .with_namespace("app"),
//!         )
//!     }
//! }
//!
//! let schema = User::schema().unwrap();
//! assert_eq!(
//!     schema.to_json(),
//!     serde_json::json!({
//!         "type": "record",
//!         "name": "User",
//!         "namespace": "app",
//!         "fields": [
//!             {"name": "name", "type": "string"},
//!             {"name": "age", "type": "int"},
//!             {"name": "email", "type": ["null", "string"], "default": null},
//!         ],
//!     })
//! );
//! ```
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `chrono` | [`AvroTyped`] for `chrono` date and time types | ❌ |
//! | `uuid` | [`AvroTyped`] for `uuid::Uuid` | ❌ |
//!
//! ## Type Mappings
//!
//! | Descriptor | Avro Schema |
//! |------------|-------------|
//! | `Text` | `"string"` |
//! | `Boolean` | `"boolean"` |
//! | `Int8`, `Int16`, `Int32` | `"int"` |
//! | `Int64` | `"long"` |
//! | `Float32` | `"float"` |
//! | `Float64` | `"double"` |
//! | `Bytes` | `"bytes"` |
//! | `Uuid` | `"string"` + `uuid` logical type |
//! | `Decimal` | `"bytes"` + `decimal` logical type |
//! | `Date` | `"int"` + `date` logical type |
//! | `TimeMillis` | `"int"` + `time-millis` logical type |
//! | `TimestampMillis` | `"long"` + `timestamp-millis` logical type |
//! | `TimestampMicros` | `"long"` + `timestamp-micros` logical type |
//! | `Optional(T)` | `["null", T]` |
//! | `Either(L, R)` | `[L, R]` |
//! | `Sequence(T)` | `{"type": "array", "items": T}` |
//! | `Mapping(Text, V)` | `{"type": "map", "values": V}` |
//! | `Tuple(T1..Tn)` | record `TupleN` in namespace `avroforge.tuple` |
//! | Product | named record |
//! | Variants (all unit) | named enum |
//! | Variants (mixed) | union of per-variant schemas |
//!
//! ## Normalization Rules
//!
//! The engine upholds Avro's structural constraints so callers never have
//! to:
//!
//! - Unions never nest; union-typed members are spliced into their parent.
//! - Duplicate union members (same Avro union key) are rejected.
//! - The union member matching a field's default value is moved first.
//! - A named schema is emitted in full once per derivation; subsequent
//!   occurrences become by-name references.
//! - One fullname with two different shapes is a
//!   [`SchemaError::NameCollision`].
//!
//! ## Schema Registry
//!
//! Use the [`SchemaRegistry`] to collect and export schemas for a set of
//! types:
//!
//! ```rust
//! use avroforge::{export, SchemaRegistry};
//! # use avroforge::ir::{FieldDescriptor, ProductDescriptor, TypeDescriptor};
//! # use avroforge::reflect::AvroTyped;
//! # struct User;
//! # impl AvroTyped for User {
//! #     fn descriptor() -> TypeDescriptor {
//! #         TypeDescriptor::Product(ProductDescriptor::new(
//! #             "User",
//! #             vec![FieldDescriptor::new("name", String::descriptor())],
//! #         ).with_namespace("app"))
//! #     }
//! # }
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register::<User>().unwrap();
//!
//! for (fullname, document) in export::render_registry(&registry, &Default::default()) {
//!     println!("{}: {}", export::document_name(&fullname), document);
//! }
//! ```

pub mod config;
pub mod derive;
pub mod error;
pub mod export;
pub mod ir;
pub mod reflect;
pub mod registry;
pub mod schema;
pub mod value;

pub use config::{DecimalSettings, DeriveConfig, NamingConvention, RoundingMode};
pub use derive::derive_schema;
pub use error::SchemaError;
pub use ir::TypeDescriptor;
pub use reflect::AvroTyped;
pub use registry::SchemaRegistry;
pub use schema::SchemaNode;
