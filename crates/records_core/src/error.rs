//! Error types for record schemas.
//!
//! These errors describe problems with a schema definition itself, as opposed
//! to problems with the data validated against it.

use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Main error type for schema definition problems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Two fields share the same name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// A type expression could not be parsed
    #[error("Invalid field type '{input}': {reason}")]
    InvalidType {
        /// The type expression as written
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Schema declares no fields
    #[error("Schema '{0}' has no fields defined")]
    EmptySchema(String),

    /// A constraint is not applicable to its field
    #[error("Invalid constraint on field '{field}': {message}")]
    InvalidConstraint {
        /// Field name
        field: String,
        /// Description of the problem
        message: String,
    },

    /// A declared default does not conform to the field type
    #[error("Invalid default for field '{field}': {message}")]
    InvalidDefault {
        /// Field name
        field: String,
        /// Description of the problem
        message: String,
    },
}

impl SchemaError {
    /// Creates a new invalid type error.
    pub fn invalid_type(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidType {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new invalid constraint error.
    pub fn invalid_constraint(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a new invalid default error.
    pub fn invalid_default(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefault {
            field: field.into(),
            message: message.into(),
        }
    }
}
