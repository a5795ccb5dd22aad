//! Error types for validation operations.

use records_core::{FieldType, NumericBounds, Value};
use std::fmt;
use thiserror::Error;

/// A single violation found while validating a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Required field is missing and has no default
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    /// Value does not have the declared type or format
    #[error("Type mismatch for field '{field}': expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// Numeric value outside its exclusive bounds
    #[error("Value {value} for field '{field}' is outside {bounds}")]
    OutOfRange {
        field: String,
        value: f64,
        bounds: NumericBounds,
    },

    /// String value does not match its pattern
    #[error("Value '{value}' for field '{field}' does not match pattern '{pattern}'")]
    PatternMismatch {
        field: String,
        value: String,
        pattern: String,
    },

    /// Invalid regex pattern
    #[error("Invalid regex pattern for field '{field}': {error}")]
    InvalidRegex { field: String, error: String },

    /// Constraint cannot be applied to the value
    #[error("Constraint violation for field '{field}': {message}")]
    ConstraintViolation { field: String, message: String },

    /// Key not declared by the schema (strict mode only)
    #[error("Unexpected field '{0}'")]
    UnexpectedField(String),
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &FieldType, value: &Value) -> Self {
        let actual = match value {
            // Format and enum failures: the type matched, so show the value
            Value::String(s) if expected.is_string_like() => format!("string {:?}", s),
            other => other.type_name().to_string(),
        };

        Self::TypeMismatch {
            field: field.into(),
            expected: expected.to_string(),
            actual,
        }
    }

    /// Creates a new out of range error.
    pub fn out_of_range(field: impl Into<String>, value: f64, bounds: NumericBounds) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            bounds,
        }
    }

    /// Creates a new constraint violation error.
    pub fn constraint(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a new unexpected field error.
    pub fn unexpected_field(field: impl Into<String>) -> Self {
        Self::UnexpectedField(field.into())
    }

    /// Name (or indexed path, e.g. `pros[2]`) of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field) | Self::UnexpectedField(field) => field,
            Self::TypeMismatch { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::PatternMismatch { field, .. }
            | Self::InvalidRegex { field, .. }
            | Self::ConstraintViolation { field, .. } => field,
        }
    }
}

/// Every violation found in one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    schema: String,
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn new(schema: impl Into<String>, errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            schema: schema.into(),
            errors,
        }
    }

    /// Name of the schema that rejected the input.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// The individual violations, in schema order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the violations.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Returns the violations.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.errors.len() == 1 { "" } else { "s" };
        write!(
            f,
            "{} validation error{} for {}",
            self.errors.len(),
            plural,
            self.schema
        )?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Errors from decoding a serialized record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Text is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON is valid but not an object
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// Object does not satisfy the schema
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}
