//! Unchecked structural shapes.
//!
//! A [`Shape`] documents which keys a mapping is expected to carry and what
//! their types are, without any runtime check. Annotating a map with a shape
//! never fails: missing keys and mistyped values are accepted as they are.
//! Use a [`RecordSchema`] and the validator when the data must be checked.

use crate::{DataMap, FieldSpec, FieldType, RecordSchema, SchemaError, Value};
use std::fmt;

/// One documented key of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEntry {
    /// Key name
    pub name: String,
    /// Declared type (documentation only)
    pub field_type: FieldType,
    /// Optional description
    pub description: Option<String>,
}

/// A named, documentation-only description of a mapping.
///
/// # Example
///
/// ```rust
/// use records_core::{DataMap, FieldType, Shape, Value};
///
/// let person = Shape::new("person")
///     .entry("name", FieldType::String)
///     .entry("age", FieldType::Integer)
///     .entry("email", FieldType::optional(FieldType::String));
///
/// let mut map = DataMap::new();
/// map.insert("name".to_string(), Value::from("Alice"));
/// map.insert("age".to_string(), Value::from(30));
///
/// let shaped = person.annotate(map);
/// assert_eq!(shaped.missing_keys(), vec!["email"]);
/// assert_eq!(shaped.to_string(), r#"{"name": "Alice", "age": 30}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    name: String,
    entries: Vec<ShapeEntry>,
}

impl Shape {
    /// Creates an empty shape.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Adds an undocumented key.
    pub fn entry(self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.push(name.into(), field_type, None)
    }

    /// Adds a key with a description.
    pub fn described(
        self,
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
    ) -> Self {
        self.push(name.into(), field_type, Some(description.into()))
    }

    fn push(mut self, name: String, field_type: FieldType, description: Option<String>) -> Self {
        self.entries.push(ShapeEntry {
            name,
            field_type,
            description,
        });
        self
    }

    /// Shape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documented keys in declaration order.
    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }

    /// Annotates a mapping with this shape. Never fails.
    pub fn annotate(&self, values: DataMap) -> Shaped<'_> {
        Shaped {
            shape: self,
            values,
        }
    }

    /// Converts the shape into a checked schema.
    ///
    /// Entries with an `optional<..>` type become non-required; all others
    /// are required.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] if a key was declared twice.
    pub fn to_schema(&self) -> Result<RecordSchema, SchemaError> {
        let fields = self
            .entries
            .iter()
            .map(|entry| FieldSpec {
                required: !entry.field_type.is_optional(),
                description: entry.description.clone(),
                ..FieldSpec::new(entry.name.clone(), entry.field_type.clone())
            })
            .collect();

        RecordSchema::new(self.name.clone(), fields)
    }
}

impl From<&RecordSchema> for Shape {
    /// Documents the keys of a schema; defaults and constraints are dropped.
    fn from(schema: &RecordSchema) -> Self {
        Self {
            name: schema.name().to_string(),
            entries: schema
                .fields()
                .iter()
                .map(|field| ShapeEntry {
                    name: field.name.clone(),
                    field_type: field.field_type.clone(),
                    description: field.description.clone(),
                })
                .collect(),
        }
    }
}

/// A mapping annotated with a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub struct Shaped<'a> {
    shape: &'a Shape,
    values: DataMap,
}

impl Shaped<'_> {
    /// Name of the annotating shape.
    pub fn shape_name(&self) -> &str {
        self.shape.name()
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The underlying mapping.
    pub fn values(&self) -> &DataMap {
        &self.values
    }

    /// Returns the underlying mapping.
    pub fn into_inner(self) -> DataMap {
        self.values
    }

    /// Documented keys that the mapping does not carry.
    pub fn missing_keys(&self) -> Vec<&str> {
        self.shape
            .entries
            .iter()
            .filter(|e| !self.values.contains_key(&e.name))
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Keys carried by the mapping that the shape does not document.
    pub fn undocumented_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .filter(|k| !self.shape.entries.iter().any(|e| &e.name == *k))
            .map(String::as_str)
            .collect()
    }
}

impl fmt::Display for Shaped<'_> {
    /// Documented keys first, in shape order, then the rest in key order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let documented = self
            .shape
            .entries
            .iter()
            .filter_map(|e| self.values.get_key_value(&e.name));
        let undocumented = self
            .undocumented_keys()
            .into_iter()
            .filter_map(|k| self.values.get_key_value(k));

        f.write_str("{")?;
        for (i, (key, value)) in documented.chain(undocumented).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", key, value)?;
        }
        f.write_str("}")
    }
}
