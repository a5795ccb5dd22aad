//! # Structured Records Core
//!
//! Core data structures for the Structured Records workspace.
//!
//! This crate provides the building blocks for describing what a valid record
//! looks like. A record schema is an ordered, name-unique list of field
//! specifications; the validator crate interprets it against untrusted input.
//!
//! ## Key Concepts
//!
//! - **RecordSchema**: Named, ordered set of [`FieldSpec`]s
//! - **FieldType**: Tagged variant per supported field type (`string`, `integer`,
//!   `float`, `boolean`, `email`, `enum<..>`, `list<..>`, `optional<..>`)
//! - **Value**: Dynamically typed input and output values
//! - **Shape**: Documentation-only structural annotation, never validated
//!
//! ## Example
//!
//! ```rust
//! use records_core::{FieldBuilder, FieldType, SchemaBuilder, Value};
//!
//! let schema = SchemaBuilder::new("Person")
//!     .field(
//!         FieldBuilder::new("name", FieldType::String)
//!             .default(Value::from("John"))
//!             .build(),
//!     )
//!     .field(
//!         FieldBuilder::new("age", FieldType::optional(FieldType::Integer))
//!             .optional()
//!             .build(),
//!     )
//!     .field(FieldBuilder::new("email", FieldType::Email).build())
//!     .field(
//!         FieldBuilder::new("cgpa", FieldType::Float)
//!             .gt(0.0)
//!             .lt(10.0)
//!             .description("cgpa must be between 0 to 10")
//!             .build(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.len(), 4);
//! assert!(schema.field("cgpa").is_some());
//! ```

pub mod builder;
pub mod error;
pub mod report;
pub mod schema;
pub mod shape;
pub mod types;
pub mod value;

pub use builder::*;
pub use error::*;
pub use report::*;
pub use schema::*;
pub use shape::*;
pub use types::*;
pub use value::*;
