//! Derive an Avro schema for a hand-described type and print the document.
//!
//! Run with: `cargo run --example derive_person`

use avroforge::config::{DeriveConfig, NamingConvention};
use avroforge::export::{render_schema, ExportConfig};
use avroforge::ir::{
    Annotations, FieldDescriptor, ProductDescriptor, TypeDescriptor, VariantDescriptor,
    VariantsDescriptor,
};
use avroforge::reflect::AvroTyped;

struct Person;

impl AvroTyped for Person {
    fn descriptor() -> TypeDescriptor {
        let status = TypeDescriptor::Variants(
            VariantsDescriptor::new(
                "AccountStatus",
                vec![
                    VariantDescriptor::unit("Active"),
                    VariantDescriptor::unit("Suspended"),
                    VariantDescriptor::unit("Closed"),
                ],
            )
            .with_namespace("com.example"),
        );

        TypeDescriptor::Product(
            ProductDescriptor::new(
                "Person",
                vec![
                    FieldDescriptor::new("full_name", String::descriptor()),
                    FieldDescriptor::new("age", i32::descriptor()),
                    FieldDescriptor::new("email", Option::<String>::descriptor())
                        .with_null_default()
                        .with_annotations(Annotations::new().with_doc("contact address")),
                    FieldDescriptor::new("nicknames", Vec::<String>::descriptor()),
                    FieldDescriptor::new("status", status),
                ],
            )
            .with_namespace("com.example"),
        )
    }
}

fn main() {
    let config = DeriveConfig::new().with_naming(NamingConvention::CamelCase);
    let schema = Person::schema_with(&config).expect("schema derivation failed");

    println!("{}", render_schema(&schema, &ExportConfig::default()));
}
