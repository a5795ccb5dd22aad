//! Parser for record schemas (YAML/TOML) and untrusted inputs (JSON/YAML).
//!
//! This crate loads [`RecordSchema`] definitions from files and turns input
//! documents into [`DataMap`]s ready for validation. Parsing never validates
//! the data itself; it only checks that the document is well-formed and that
//! an input is a key/value object.
//!
//! # Example
//!
//! ```rust
//! use records_parser::parse_schema_yaml;
//!
//! let yaml = r#"
//! name: Person
//! fields:
//!   - name: name
//!     type: string
//!     default: John
//!   - name: email
//!     type: email
//!   - name: cgpa
//!     type: float
//!     constraints:
//!       - type: range
//!         min_exclusive: 0
//!         max_exclusive: 10
//! "#;
//!
//! let schema = parse_schema_yaml(yaml).expect("Failed to parse schema");
//! assert_eq!(schema.name(), "Person");
//! assert_eq!(schema.len(), 3);
//! ```

use records_core::{DataMap, RecordSchema, Value};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during schema or input parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Input document is not a key/value object
    #[error("Input must be an object of field names to values, found {0}")]
    NotAnObject(&'static str),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported schema file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Supported input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
}

/// Parse a schema from a YAML string.
///
/// Duplicate field names and unknown type names are reported as YAML
/// deserialization errors.
pub fn parse_schema_yaml(content: &str) -> Result<RecordSchema> {
    let schema: RecordSchema = serde_yaml_ng::from_str(content)?;
    Ok(schema)
}

/// Parse a schema from a TOML string.
///
/// # Example
///
/// ```rust
/// use records_parser::parse_schema_toml;
///
/// let toml = r#"
/// name = "Person"
///
/// [[fields]]
/// name = "age"
/// type = "optional<integer>"
/// required = false
/// "#;
///
/// let schema = parse_schema_toml(toml).unwrap();
/// assert!(!schema.fields()[0].required);
/// ```
pub fn parse_schema_toml(content: &str) -> Result<RecordSchema> {
    let schema: RecordSchema =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(schema)
}

fn extension(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or(ParserError::InvalidExtension)
}

/// Detect the schema format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `SchemaFormat::Yaml`
/// * `.toml` → `SchemaFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_schema_format(path: &Path) -> Result<SchemaFormat> {
    match extension(path)?.as_str() {
        "yaml" | "yml" => Ok(SchemaFormat::Yaml),
        "toml" => Ok(SchemaFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Detect the input format from a file path based on its extension.
///
/// * `.json` → `InputFormat::Json`
/// * `.yaml`, `.yml` → `InputFormat::Yaml`
pub fn detect_input_format(path: &Path) -> Result<InputFormat> {
    match extension(path)?.as_str() {
        "json" => Ok(InputFormat::Json),
        "yaml" | "yml" => Ok(InputFormat::Yaml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a schema from a file with automatic format detection.
///
/// ```no_run
/// use records_parser::parse_schema_file;
/// use std::path::Path;
///
/// let schema = parse_schema_file(Path::new("schemas/person.yml")).unwrap();
/// println!("Loaded schema: {}", schema.name());
/// ```
pub fn parse_schema_file(path: &Path) -> Result<RecordSchema> {
    let format = detect_schema_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        SchemaFormat::Yaml => parse_schema_yaml(&content),
        SchemaFormat::Toml => parse_schema_toml(&content),
    }
}

/// Parse an input object from a JSON string.
pub fn parse_input_json(content: &str) -> Result<DataMap> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    into_object(Value::from(value))
}

/// Parse an input object from a YAML string.
pub fn parse_input_yaml(content: &str) -> Result<DataMap> {
    let value: Value = serde_yaml_ng::from_str(content)?;
    into_object(value)
}

/// Parse an input object from a file with automatic format detection.
pub fn parse_input_file(path: &Path) -> Result<DataMap> {
    let format = detect_input_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        InputFormat::Json => parse_input_json(&content),
        InputFormat::Yaml => parse_input_yaml(&content),
    }
}

fn into_object(value: Value) -> Result<DataMap> {
    match value {
        Value::Map(map) => Ok(map),
        other => Err(ParserError::NotAnObject(other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use records_core::{FieldConstraint, FieldType, NumericBounds};

    #[test]
    fn test_parse_valid_yaml_minimal() {
        let yaml = r#"
name: test_schema
fields: []
"#;

        let schema = parse_schema_yaml(yaml).unwrap();
        assert_eq!(schema.name(), "test_schema");
        assert!(schema.is_empty());
        assert_eq!(schema.description(), None);
    }

    #[test]
    fn test_parse_yaml_full_field() {
        let yaml = r#"
name: Person
description: A student
fields:
  - name: name
    type: str
    default: John
  - name: age
    type: optional<int>
    required: false
  - name: cgpa
    type: float
    description: cgpa must be between 0 to 10
    constraints:
      - type: range
        min_exclusive: 0
        max_exclusive: 10
"#;

        let schema = parse_schema_yaml(yaml).unwrap();
        assert_eq!(schema.description(), Some("A student"));

        let name = schema.field("name").unwrap();
        assert_eq!(name.field_type, FieldType::String);
        assert_eq!(name.default, Some(Value::from("John")));
        assert!(name.required);

        let age = schema.field("age").unwrap();
        assert_eq!(age.field_type, FieldType::optional(FieldType::Integer));
        assert!(!age.required);

        let cgpa = schema.field("cgpa").unwrap();
        assert_eq!(
            cgpa.constraints,
            vec![FieldConstraint::Range {
                min_exclusive: Some(0.0),
                max_exclusive: Some(10.0),
            }]
        );
        assert_eq!(cgpa.bounds().next(), Some(NumericBounds::between(0.0, 10.0)));
    }

    #[test]
    fn test_parse_yaml_enum_and_list() {
        let yaml = r#"
name: Review
fields:
  - name: sentiment
    type: enum<pos|neg>
  - name: pros
    type: optional<list<string>>
    required: false
  - name: code
    type: string
    constraints:
      - type: pattern
        regex: "^[A-Z]+$"
"#;

        let schema = parse_schema_yaml(yaml).unwrap();
        assert_eq!(
            schema.fields()[0].field_type,
            FieldType::enumeration(["pos", "neg"])
        );
        assert_eq!(
            schema.fields()[1].field_type,
            FieldType::optional(FieldType::list(FieldType::String))
        );
        assert_eq!(
            schema.fields()[2].constraints,
            vec![FieldConstraint::Pattern {
                regex: "^[A-Z]+$".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_yaml_duplicate_field() {
        let yaml = r#"
name: dup
fields:
  - name: a
    type: string
  - name: a
    type: integer
"#;

        let err = parse_schema_yaml(yaml).unwrap_err();
        assert!(matches!(err, ParserError::YamlError(_)));
        assert!(err.to_string().contains("Duplicate field"));
    }

    #[test]
    fn test_parse_yaml_unknown_type() {
        let yaml = r#"
name: bad
fields:
  - name: a
    type: timestamp
"#;

        assert!(matches!(
            parse_schema_yaml(yaml),
            Err(ParserError::YamlError(_))
        ));
    }

    #[test]
    fn test_parse_yaml_missing_name() {
        let yaml = "fields: []\n";
        assert!(parse_schema_yaml(yaml).is_err());
    }

    #[test]
    fn test_parse_valid_toml() {
        let toml = r#"
name = "Person"

[[fields]]
name = "email"
type = "email"

[[fields]]
name = "cgpa"
type = "float"

[[fields.constraints]]
type = "range"
min_exclusive = 0.0
max_exclusive = 10.0
"#;

        let schema = parse_schema_toml(toml).unwrap();
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["email", "cgpa"]);
        assert_eq!(schema.fields()[1].constraints.len(), 1);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_schema_toml("name = ").unwrap_err();
        assert!(matches!(err, ParserError::TomlError(_)));
    }

    #[test]
    fn test_detect_schema_format() {
        assert_eq!(
            detect_schema_format(Path::new("person.yml")).unwrap(),
            SchemaFormat::Yaml
        );
        assert_eq!(
            detect_schema_format(Path::new("person.YAML")).unwrap(),
            SchemaFormat::Yaml
        );
        assert_eq!(
            detect_schema_format(Path::new("person.toml")).unwrap(),
            SchemaFormat::Toml
        );
        assert!(matches!(
            detect_schema_format(Path::new("person.json")),
            Err(ParserError::UnsupportedFormat(ext)) if ext == "json"
        ));
        assert!(matches!(
            detect_schema_format(Path::new("person")),
            Err(ParserError::InvalidExtension)
        ));
    }

    #[test]
    fn test_detect_input_format() {
        assert_eq!(
            detect_input_format(Path::new("input.json")).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            detect_input_format(Path::new("input.yaml")).unwrap(),
            InputFormat::Yaml
        );
        assert!(detect_input_format(Path::new("input.toml")).is_err());
    }

    #[test]
    fn test_parse_input_json() {
        let input = parse_input_json(r#"{"age": 32, "cgpa": 9.5, "email": null}"#).unwrap();
        assert_eq!(input["age"], Value::Int(32));
        assert_eq!(input["cgpa"], Value::Float(9.5));
        assert_eq!(input["email"], Value::Null);
    }

    #[test]
    fn test_parse_input_yaml() {
        let input = parse_input_yaml("age: 32\npros:\n  - fast\n  - light\n").unwrap();
        assert_eq!(input["age"], Value::Int(32));
        assert_eq!(input["pros"], Value::from(vec!["fast", "light"]));
    }

    #[test]
    fn test_parse_input_not_an_object() {
        assert!(matches!(
            parse_input_json("[1, 2, 3]"),
            Err(ParserError::NotAnObject("list"))
        ));
        assert!(matches!(
            parse_input_yaml("just text"),
            Err(ParserError::NotAnObject("string"))
        ));
    }
}
