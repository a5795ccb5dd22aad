//! # Structured Records Validator
//!
//! Validation engine for record schemas. This crate turns untrusted key/value
//! input into immutable, schema-conforming [`Record`]s:
//!
//! - Type checking (exact matches, integer to float widening, email format,
//!   enum membership, list elements, optional nulls)
//! - Defaults and optional fields for absent keys
//! - Constraint validation (exclusive numeric bounds, regex patterns)
//! - Schema definition checks (inapplicable constraints, invalid defaults)
//!
//! Every violation is collected; a failed pass returns all of them at once.
//!
//! ## Example
//!
//! ```rust
//! use records_core::{DataMap, FieldBuilder, FieldType, SchemaBuilder, Value};
//! use records_validator::{FieldError, RecordValidator};
//!
//! let schema = SchemaBuilder::new("Person")
//!     .field(FieldBuilder::new("email", FieldType::Email).build())
//!     .field(FieldBuilder::new("cgpa", FieldType::Float).gt(0.0).lt(10.0).build())
//!     .build()
//!     .unwrap();
//!
//! let mut input = DataMap::new();
//! input.insert("cgpa".to_string(), Value::from(12));
//!
//! let mut validator = RecordValidator::new();
//! match validator.validate(&schema, &input) {
//!     Ok(record) => println!("{}", record),
//!     Err(errors) => {
//!         assert_eq!(errors.len(), 2);
//!         assert!(matches!(errors.errors()[0], FieldError::MissingField(_)));
//!         assert!(matches!(errors.errors()[1], FieldError::OutOfRange { .. }));
//!     }
//! }
//! ```

mod constraints;
mod engine;
mod error;
mod record;
mod schema;

pub use constraints::*;
pub use engine::*;
pub use error::*;
pub use record::*;
pub use schema::*;
