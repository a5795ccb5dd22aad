//! Main validation engine.
//!
//! This module provides the [`RecordValidator`] that turns an untrusted input
//! mapping into a [`Record`], running type checks, defaults, and constraint
//! checks for every schema field and collecting every violation.

use crate::{ConstraintValidator, FieldError, Record, SchemaValidator, ValidationErrors};
use records_core::{
    DataMap, RecordSchema, ValidationContext, ValidationReport, ValidationStats, Value,
};
use std::time::Instant;
use tracing::debug;

/// Main validation engine for record schemas.
///
/// # Example
///
/// ```rust
/// use records_core::{DataMap, FieldBuilder, FieldType, SchemaBuilder, Value};
/// use records_validator::RecordValidator;
///
/// let schema = SchemaBuilder::new("Person")
///     .field(FieldBuilder::new("name", FieldType::String).default("John").build())
///     .field(FieldBuilder::new("cgpa", FieldType::Float).gt(0.0).lt(10.0).build())
///     .build()
///     .unwrap();
///
/// let mut input = DataMap::new();
/// input.insert("cgpa".to_string(), Value::from(9));
///
/// let mut validator = RecordValidator::new();
/// let record = validator.validate(&schema, &input).unwrap();
/// assert_eq!(record.get("name"), Some(&Value::from("John")));
/// assert_eq!(record.get("cgpa"), Some(&Value::Float(9.0)));
/// ```
pub struct RecordValidator {
    schema_validator: SchemaValidator,
    constraint_validator: ConstraintValidator,
    context: ValidationContext,
}

/// Outcome of one pass before it is shaped into a result or report.
struct Pass {
    result: Result<Record, ValidationErrors>,
    ignored: Vec<String>,
    constraints_evaluated: usize,
}

impl RecordValidator {
    /// Creates a new validator with the default (non-strict) context.
    pub fn new() -> Self {
        Self::with_context(ValidationContext::default())
    }

    /// Creates a new validator with the given context.
    pub fn with_context(context: ValidationContext) -> Self {
        Self {
            schema_validator: SchemaValidator::new(),
            constraint_validator: ConstraintValidator::new(),
            context,
        }
    }

    /// The options this validator runs with.
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Validates an input mapping against a schema.
    ///
    /// Every schema field is processed in order; all violations are
    /// collected rather than stopping at the first one.
    pub fn validate(
        &mut self,
        schema: &RecordSchema,
        input: &DataMap,
    ) -> Result<Record, ValidationErrors> {
        self.run(schema, input).result
    }

    /// Validates an input mapping and also builds a printable report.
    ///
    /// In non-strict mode, undeclared keys that were dropped are listed as
    /// warnings.
    pub fn validate_with_report(
        &mut self,
        schema: &RecordSchema,
        input: &DataMap,
    ) -> (Result<Record, ValidationErrors>, ValidationReport) {
        let start = Instant::now();
        let pass = self.run(schema, input);

        let mut report = ValidationReport::success();
        if let Err(errors) = &pass.result {
            for error in errors {
                report.add_error(error.to_string());
            }
        }
        for key in &pass.ignored {
            report.add_warning(format!(
                "Field '{}' is not declared by schema '{}' and was ignored",
                key,
                schema.name()
            ));
        }
        report.stats = ValidationStats {
            records_validated: 1,
            fields_checked: schema.len(),
            constraints_evaluated: pass.constraints_evaluated,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        (pass.result, report)
    }

    /// Validates only the schema definition itself (no data).
    ///
    /// Useful for checking that a schema is well-formed before validating
    /// data against it.
    pub fn validate_definition(&self, schema: &RecordSchema) -> ValidationReport {
        let start = Instant::now();
        let errors: Vec<String> = self
            .schema_validator
            .validate_schema_definition(schema)
            .iter()
            .map(|e| e.to_string())
            .collect();

        ValidationReport {
            passed: errors.is_empty(),
            errors,
            warnings: Vec::new(),
            stats: ValidationStats {
                records_validated: 0,
                fields_checked: schema.len(),
                constraints_evaluated: schema.fields().iter().map(|f| f.constraints.len()).sum(),
                duration_ms: start.elapsed().as_millis() as u64,
            },
        }
    }

    fn run(&mut self, schema: &RecordSchema, input: &DataMap) -> Pass {
        debug!(
            schema = schema.name(),
            fields = schema.len(),
            keys = input.len(),
            "Validating record"
        );

        let mut values: Vec<(String, Value)> = Vec::with_capacity(schema.len());
        let mut errors = Vec::new();
        let mut constraints_evaluated = 0;

        for field in schema.fields() {
            let absent;
            let raw = match input.get(&field.name) {
                Some(raw) => raw,
                None => match field.value_when_absent() {
                    Some(value) => {
                        absent = value;
                        &absent
                    }
                    None => {
                        errors.push(FieldError::missing_field(&field.name));
                        continue;
                    }
                },
            };

            // A non-required field stores null when absent, so an explicit
            // null must read back the same way.
            if raw.is_null() && !field.required {
                values.push((field.name.clone(), Value::Null));
                continue;
            }

            // Defaults go through the same checks as supplied values.
            match self
                .schema_validator
                .check_type(&field.name, &field.field_type, raw)
            {
                Ok(value) => {
                    constraints_evaluated += field.constraints.len();
                    let violations = self.constraint_validator.validate(field, &value);
                    if violations.is_empty() {
                        values.push((field.name.clone(), value));
                    } else {
                        errors.extend(violations);
                    }
                }
                Err(type_errors) => errors.extend(type_errors),
            }
        }

        let mut ignored = Vec::new();
        for key in input.keys().filter(|key| !schema.contains(key)) {
            if self.context.strict {
                errors.push(FieldError::unexpected_field(key));
            } else {
                debug!(schema = schema.name(), field = %key, "Dropping undeclared field");
                ignored.push(key.clone());
            }
        }

        let result = if errors.is_empty() {
            Ok(Record::new(schema.name(), values))
        } else {
            debug!(
                schema = schema.name(),
                errors = errors.len(),
                "Record failed validation"
            );
            Err(ValidationErrors::new(schema.name(), errors))
        };

        Pass {
            result,
            ignored,
            constraints_evaluated,
        }
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates `input` against `schema` with default options.
///
/// Shorthand for `RecordValidator::new().validate(schema, input)`.
pub fn validate(schema: &RecordSchema, input: &DataMap) -> Result<Record, ValidationErrors> {
    RecordValidator::new().validate(schema, input)
}
