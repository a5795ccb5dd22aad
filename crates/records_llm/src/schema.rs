//! JSON Schema export for structured output requests.

use records_core::{FieldConstraint, FieldSpec, FieldType, RecordSchema};
use serde_json::{json, Map, Value as JsonValue};

/// Builds the JSON Schema object describing records of `schema`.
///
/// Field descriptions are carried over so the model sees them as
/// instructions. Fields that must be supplied (required, no default) are
/// listed under `required`.
///
/// # Example
///
/// ```rust
/// use records_core::{FieldBuilder, FieldType, SchemaBuilder};
/// use records_llm::json_schema;
///
/// let schema = SchemaBuilder::new("Person")
///     .field(FieldBuilder::new("cgpa", FieldType::Float).gt(0.0).lt(10.0).build())
///     .build()
///     .unwrap();
///
/// let doc = json_schema(&schema);
/// assert_eq!(doc["properties"]["cgpa"]["exclusiveMaximum"], 10.0);
/// assert_eq!(doc["required"][0], "cgpa");
/// ```
pub fn json_schema(schema: &RecordSchema) -> JsonValue {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in schema.fields() {
        properties.insert(field.name.clone(), field_schema(field));
        if field.value_when_absent().is_none() {
            required.push(JsonValue::from(field.name.clone()));
        }
    }

    let mut doc = Map::new();
    doc.insert("title".to_string(), json!(schema.name()));
    if let Some(description) = schema.description() {
        doc.insert("description".to_string(), json!(description));
    }
    doc.insert("type".to_string(), json!("object"));
    doc.insert("properties".to_string(), JsonValue::Object(properties));
    doc.insert("required".to_string(), JsonValue::Array(required));
    doc.insert("additionalProperties".to_string(), json!(false));

    JsonValue::Object(doc)
}

/// Schema name usable as a response format identifier.
///
/// Characters outside `[A-Za-z0-9_-]` are replaced with `_`.
pub fn schema_name(schema: &RecordSchema) -> String {
    let name: String = schema
        .name()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() { "record".to_string() } else { name }
}

fn field_schema(field: &FieldSpec) -> JsonValue {
    let mut schema = match type_schema(&field.field_type) {
        JsonValue::Object(map) => map,
        _ => Map::new(),
    };

    if let Some(description) = &field.description {
        schema.insert("description".to_string(), json!(description));
    }
    if let Some(default) = &field.default {
        schema.insert("default".to_string(), JsonValue::from(default.clone()));
    }

    for constraint in &field.constraints {
        match constraint {
            FieldConstraint::Range {
                min_exclusive,
                max_exclusive,
            } => {
                if let Some(min) = min_exclusive {
                    schema.insert("exclusiveMinimum".to_string(), json!(min));
                }
                if let Some(max) = max_exclusive {
                    schema.insert("exclusiveMaximum".to_string(), json!(max));
                }
            }
            FieldConstraint::Pattern { regex } => {
                schema.insert("pattern".to_string(), json!(regex));
            }
        }
    }

    JsonValue::Object(schema)
}

fn type_schema(field_type: &FieldType) -> JsonValue {
    match field_type {
        FieldType::String => json!({ "type": "string" }),
        FieldType::Integer => json!({ "type": "integer" }),
        FieldType::Float => json!({ "type": "number" }),
        FieldType::Boolean => json!({ "type": "boolean" }),
        FieldType::Email => json!({ "type": "string", "format": "email" }),
        FieldType::Enum(variants) => json!({ "type": "string", "enum": variants }),
        FieldType::List(element) => json!({ "type": "array", "items": type_schema(element) }),
        FieldType::Optional(inner) => json!({ "anyOf": [type_schema(inner), { "type": "null" }] }),
    }
}
