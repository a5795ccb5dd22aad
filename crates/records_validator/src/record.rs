//! Validated records.

use crate::{DecodeError, RecordValidator};
use records_core::{DataMap, RecordSchema, Value};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// An immutable, schema-validated record.
///
/// Records are only produced by [`RecordValidator::validate`] (or
/// [`Record::from_json`], which validates). They hold every schema field, in
/// schema order, and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    pub(crate) fn new(schema: impl Into<String>, fields: Vec<(String, Value)>) -> Self {
        Self {
            schema: schema.into(),
            fields,
        }
    }

    /// Name of the schema this record was validated against.
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Gets a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterates over `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true for a record of an empty schema.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Plain key/value view, for code that does not need the schema.
    pub fn as_mapping(&self) -> DataMap {
        self.fields.iter().cloned().collect()
    }

    /// Consumes the record into a plain key/value mapping.
    pub fn into_mapping(self) -> DataMap {
        self.fields.into_iter().collect()
    }

    /// Serializes the record as a compact JSON object in schema order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the record as an indented JSON object in schema order.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a JSON object and validates it against `schema`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use records_core::{FieldSpec, FieldType, RecordSchema};
    /// use records_validator::Record;
    ///
    /// let schema = RecordSchema::new("Point", vec![
    ///     FieldSpec::new("x", FieldType::Float),
    ///     FieldSpec::new("y", FieldType::Float),
    /// ]).unwrap();
    ///
    /// let record = Record::from_json(&schema, r#"{"x": 1, "y": 2.5}"#).unwrap();
    /// assert_eq!(record.to_json().unwrap(), r#"{"x":1.0,"y":2.5}"#);
    /// ```
    pub fn from_json(schema: &RecordSchema, text: &str) -> Result<Record, DecodeError> {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        let input = match Value::from(parsed) {
            Value::Map(map) => map,
            other => return Err(DecodeError::NotAnObject(other.type_name())),
        };

        Ok(RecordValidator::new().validate(schema, &input)?)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Record {
    /// Canonical `key=value` text form, e.g. `name="John" age=32`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
