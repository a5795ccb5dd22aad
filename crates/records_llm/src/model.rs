//! Schema-bound generation.

use crate::{GenerationError, StructuredGenerator};
use records_core::{RecordSchema, ValidationContext};
use records_validator::{Record, RecordValidator};
use tracing::debug;

/// A generator bound to a schema.
///
/// Every response is validated against the schema like any other untrusted
/// input; only a valid [`Record`] is returned.
#[derive(Debug)]
pub struct StructuredModel<G> {
    generator: G,
    schema: RecordSchema,
    context: ValidationContext,
}

impl<G: StructuredGenerator> StructuredModel<G> {
    /// Binds `generator` to `schema` with default validation options.
    pub fn new(generator: G, schema: RecordSchema) -> Self {
        Self {
            generator,
            schema,
            context: ValidationContext::default(),
        }
    }

    /// Sets the validation options applied to responses.
    pub fn with_context(mut self, context: ValidationContext) -> Self {
        self.context = context;
        self
    }

    /// The schema responses are validated against.
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// The underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates a response for `prompt` and validates it.
    pub async fn invoke(&self, prompt: &str) -> Result<Record, GenerationError> {
        let output = self
            .generator
            .generate_structured(prompt, &self.schema)
            .await?;
        debug!(
            schema = self.schema.name(),
            keys = output.len(),
            "Validating generated output"
        );

        let mut validator = RecordValidator::with_context(self.context.clone());
        Ok(validator.validate(&self.schema, &output)?)
    }
}
