//! Validating a Person record with defaults and a bounded field.
//!
//! Run with: cargo run -p records_validator --example person

use records_core::{DataMap, FieldBuilder, FieldType, SchemaBuilder, Value};
use records_validator::RecordValidator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = SchemaBuilder::new("Student")
        .field(FieldBuilder::new("name", FieldType::String).default("John").build())
        .field(
            FieldBuilder::new("age", FieldType::optional(FieldType::Integer))
                .optional()
                .build(),
        )
        .field(FieldBuilder::new("email", FieldType::Email).build())
        .field(
            FieldBuilder::new("cgpa", FieldType::Float)
                .gt(0.0)
                .lt(10.0)
                .description("A decimal value representing the cgpa of the student")
                .build(),
        )
        .build()?;

    let mut new_student = DataMap::new();
    new_student.insert("age".to_string(), Value::from(32));
    new_student.insert("email".to_string(), Value::from("abc@gmail.com"));
    new_student.insert("cgpa".to_string(), Value::from(9));

    let mut validator = RecordValidator::new();
    let student = validator.validate(&schema, &new_student)?;

    println!("{}", student);
    println!("{:?}", student.as_mapping());
    println!("{}", student.to_json()?);

    new_student.insert("cgpa".to_string(), Value::from(12));
    if let Err(errors) = validator.validate(&schema, &new_student) {
        println!("{}", errors);
    }

    Ok(())
}
