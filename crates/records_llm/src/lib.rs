//! Structured output from text-generation models.
//!
//! This crate asks an OpenAI-compatible chat completions endpoint for a
//! response shaped like a [`RecordSchema`](records_core::RecordSchema) and
//! feeds the returned object through the validator, exactly like any other
//! untrusted input.
//!
//! # Example
//!
//! ```no_run
//! use records_core::{FieldBuilder, FieldType, SchemaBuilder};
//! use records_llm::{GeneratorConfig, OpenAiGenerator, StructuredGenerator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::new("Review")
//!     .field(FieldBuilder::new("summary", FieldType::String).build())
//!     .field(FieldBuilder::new("sentiment", FieldType::enumeration(["pos", "neg"])).build())
//!     .build()?;
//!
//! let generator = OpenAiGenerator::new(GeneratorConfig::from_env()?)?;
//! let model = generator.with_structured_output(schema);
//!
//! let review = model.invoke("The phone is great but the battery is weak.").await?;
//! println!("{}", review);
//! # Ok(())
//! # }
//! ```

use records_validator::ValidationErrors;
use thiserror::Error;

mod client;
mod config;
mod model;
mod schema;

pub use client::{OpenAiGenerator, StructuredGenerator};
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use model::StructuredModel;
pub use schema::{json_schema, schema_name};

/// Error types for structured generation.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The endpoint could not be reached or the transfer failed
    #[error("Request to {endpoint} failed: {source}")]
    UpstreamRequest {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("{endpoint} returned {status}: {body}")]
    UpstreamStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response could not be interpreted as a JSON object
    #[error("Unexpected response from model: {0}")]
    UpstreamFormat(String),

    /// Configuration error
    #[error("Invalid generator configuration: {0}")]
    Config(String),

    /// The model's output does not satisfy the schema
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
