//! Documentation-only shape annotation.
//!
//! Run with: cargo run -p records_core --example typed_shape

use records_core::{DataMap, FieldType, Shape, Value};

fn main() {
    let person = Shape::new("person")
        .entry("name", FieldType::String)
        .entry("age", FieldType::Integer)
        .entry("email", FieldType::optional(FieldType::String));

    let mut new_person = DataMap::new();
    new_person.insert("name".to_string(), Value::from("Alice"));
    new_person.insert("age".to_string(), Value::from(30));

    // No runtime check: the missing "email" key is accepted as is
    let shaped = person.annotate(new_person);
    println!("{}", shaped);
    println!("not set: {:?}", shaped.missing_keys());
}
