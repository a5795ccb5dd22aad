//! Type checking and schema definition checks.
//!
//! This module checks present values against their declared [`FieldType`]
//! and checks schema definitions for well-formedness.

use crate::FieldError;
use records_core::{FieldConstraint, FieldSpec, FieldType, RecordSchema, SchemaError, Value};
use regex::Regex;
use validator::ValidateEmail;

/// Checks values against field types.
///
/// The only accepted widening is integer to float; every other mismatch is
/// an error. Checking a list reports every failing element, each with an
/// indexed path such as `pros[2]`.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Creates a new schema validator.
    pub fn new() -> Self {
        Self
    }

    /// Checks a present value and returns its normalized form.
    pub fn check_type(
        &self,
        path: &str,
        expected: &FieldType,
        value: &Value,
    ) -> Result<Value, Vec<FieldError>> {
        match (expected, value) {
            (FieldType::Optional(_), Value::Null) => Ok(Value::Null),
            (FieldType::Optional(inner), _) => self.check_type(path, inner, value),

            (FieldType::String, Value::String(_))
            | (FieldType::Integer, Value::Int(_))
            | (FieldType::Float, Value::Float(_))
            | (FieldType::Boolean, Value::Bool(_)) => Ok(value.clone()),

            (FieldType::Float, Value::Int(i)) => Ok(Value::Float(*i as f64)),

            (FieldType::Email, Value::String(s)) if s.validate_email() => Ok(value.clone()),
            (FieldType::Enum(variants), Value::String(s)) if variants.contains(s) => {
                Ok(value.clone())
            }

            (FieldType::List(element), Value::List(items)) => self.check_list(path, element, items),

            _ => Err(vec![FieldError::type_mismatch(path, expected, value)]),
        }
    }

    fn check_list(
        &self,
        path: &str,
        element: &FieldType,
        items: &[Value],
    ) -> Result<Value, Vec<FieldError>> {
        let mut checked = Vec::with_capacity(items.len());
        let mut errors = Vec::new();

        for (idx, item) in items.iter().enumerate() {
            match self.check_type(&format!("{}[{}]", path, idx), element, item) {
                Ok(value) => checked.push(value),
                Err(errs) => errors.extend(errs),
            }
        }

        if errors.is_empty() {
            Ok(Value::List(checked))
        } else {
            Err(errors)
        }
    }

    /// Checks that a schema definition is well-formed.
    ///
    /// Returns a list of problems. An empty list indicates success.
    pub fn validate_schema_definition(&self, schema: &RecordSchema) -> Vec<SchemaError> {
        let mut errors = Vec::new();

        if schema.is_empty() {
            errors.push(SchemaError::EmptySchema(schema.name().to_string()));
        }

        for field in schema.fields() {
            errors.extend(self.validate_constraint_definitions(field));
            if let Some(err) = self.validate_default(field) {
                errors.push(err);
            }
        }

        errors
    }

    fn validate_constraint_definitions(&self, field: &FieldSpec) -> Vec<SchemaError> {
        let mut errors = Vec::new();

        for constraint in &field.constraints {
            match constraint {
                FieldConstraint::Range {
                    min_exclusive,
                    max_exclusive,
                } => {
                    if !field.field_type.is_numeric() {
                        errors.push(SchemaError::invalid_constraint(
                            &field.name,
                            format!("range requires a numeric type, found {}", field.field_type),
                        ));
                    }
                    if let (Some(min), Some(max)) = (min_exclusive, max_exclusive) {
                        if min >= max {
                            errors.push(SchemaError::invalid_constraint(
                                &field.name,
                                format!("empty range: min {} is not below max {}", min, max),
                            ));
                        }
                    }
                }
                FieldConstraint::Pattern { regex } => {
                    if !field.field_type.is_string_like() {
                        errors.push(SchemaError::invalid_constraint(
                            &field.name,
                            format!("pattern requires a string type, found {}", field.field_type),
                        ));
                    }
                    if let Err(e) = Regex::new(regex) {
                        errors.push(SchemaError::invalid_constraint(&field.name, e.to_string()));
                    }
                }
            }
        }

        errors
    }

    fn validate_default(&self, field: &FieldSpec) -> Option<SchemaError> {
        let default = field.default.as_ref()?;

        if default.is_null() {
            if field.field_type.is_optional() || !field.required {
                return None;
            }
            return Some(SchemaError::invalid_default(
                &field.name,
                format!("null is not a valid {}", field.field_type),
            ));
        }

        if let Err(errs) = self.check_type(&field.name, &field.field_type, default) {
            let message = errs
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Some(SchemaError::invalid_default(&field.name, message));
        }

        let value = default.as_float()?;
        field
            .bounds()
            .find(|bounds| !bounds.contains(value))
            .map(|bounds| {
                SchemaError::invalid_default(
                    &field.name,
                    format!("default {} is outside {}", value, bounds),
                )
            })
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}
