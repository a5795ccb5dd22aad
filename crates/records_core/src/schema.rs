//! Record schema types.
//!
//! This module contains the types that describe a valid record: the schema
//! itself, its field specifications, and field constraints.

use crate::{FieldType, SchemaError, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A named, ordered, name-unique set of field specifications.
///
/// Schemas are defined once and never mutated; all accessors are read-only.
/// Uniqueness of field names is enforced both by [`RecordSchema::new`] and
/// when deserializing.
///
/// # Example
///
/// ```rust
/// use records_core::{FieldSpec, FieldType, RecordSchema};
///
/// let schema = RecordSchema::new(
///     "Person",
///     vec![
///         FieldSpec::new("name", FieldType::String),
///         FieldSpec::new("email", FieldType::Email),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["name", "email"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSchema")]
pub struct RecordSchema {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    fields: Vec<FieldSpec>,
}

/// Unchecked wire form of a schema, validated into [`RecordSchema`].
#[derive(Deserialize)]
struct RawSchema {
    name: String,
    #[serde(default)]
    description: Option<String>,
    fields: Vec<FieldSpec>,
}

impl TryFrom<RawSchema> for RecordSchema {
    type Error = SchemaError;

    fn try_from(raw: RawSchema) -> Result<Self, Self::Error> {
        let mut schema = RecordSchema::new(raw.name, raw.fields)?;
        schema.description = raw.description;
        Ok(schema)
    }
}

impl RecordSchema {
    /// Creates a schema, rejecting duplicate field names.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }

        Ok(Self {
            name: name.into(),
            description: None,
            fields,
        })
    }

    /// Sets the schema description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the schema declares a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A single field definition in a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name
    pub name: String,

    /// Field type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether the key must be supplied when no default is declared
    #[serde(default = "default_required")]
    pub required: bool,

    /// Value used when the key is absent from the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Validation constraints
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<FieldConstraint>,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_required() -> bool {
    true
}

impl FieldSpec {
    /// Creates a required field with no default and no constraints.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
            default: None,
            constraints: Vec::new(),
            description: None,
        }
    }

    /// Value to use when the key is absent from the input.
    ///
    /// A declared default always wins; a non-required field without a
    /// default falls back to null. `None` means the field is missing.
    pub fn value_when_absent(&self) -> Option<Value> {
        match (&self.default, self.required) {
            (Some(default), _) => Some(default.clone()),
            (None, false) => Some(Value::Null),
            (None, true) => None,
        }
    }

    /// Iterates over the numeric bounds declared on this field.
    pub fn bounds(&self) -> impl Iterator<Item = NumericBounds> + '_ {
        self.constraints.iter().filter_map(FieldConstraint::bounds)
    }
}

/// Validation constraints that can be applied to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldConstraint {
    /// Numeric value must lie strictly between the bounds
    Range {
        /// Exclusive lower bound
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_exclusive: Option<f64>,
        /// Exclusive upper bound
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_exclusive: Option<f64>,
    },

    /// String value must match the regex pattern
    Pattern {
        /// Regular expression pattern
        regex: String,
    },
}

impl FieldConstraint {
    /// Returns the numeric bounds if this is a range constraint.
    pub fn bounds(&self) -> Option<NumericBounds> {
        match self {
            FieldConstraint::Range {
                min_exclusive,
                max_exclusive,
            } => Some(NumericBounds {
                min_exclusive: *min_exclusive,
                max_exclusive: *max_exclusive,
            }),
            FieldConstraint::Pattern { .. } => None,
        }
    }
}

/// Exclusive numeric bounds; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericBounds {
    /// Exclusive lower bound
    pub min_exclusive: Option<f64>,
    /// Exclusive upper bound
    pub max_exclusive: Option<f64>,
}

impl NumericBounds {
    /// Creates bounds with both ends set.
    pub fn between(min_exclusive: f64, max_exclusive: f64) -> Self {
        Self {
            min_exclusive: Some(min_exclusive),
            max_exclusive: Some(max_exclusive),
        }
    }

    /// Returns true if `min_exclusive < value < max_exclusive`.
    pub fn contains(&self, value: f64) -> bool {
        self.min_exclusive.is_none_or(|min| value > min)
            && self.max_exclusive.is_none_or(|max| value < max)
    }
}

impl fmt::Display for NumericBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min_exclusive {
            Some(min) => write!(f, "({}, ", min)?,
            None => f.write_str("(-inf, ")?,
        }
        match self.max_exclusive {
            Some(max) => write!(f, "{})", max),
            None => f.write_str("inf)"),
        }
    }
}
