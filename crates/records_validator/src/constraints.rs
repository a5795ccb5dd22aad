//! Constraint validation logic.
//!
//! This module handles validation of field constraints:
//! - Range: Numeric value must lie strictly between optional bounds
//! - Pattern: String value must match a regex pattern

use crate::FieldError;
use records_core::{FieldConstraint, FieldSpec, Value};
use regex::Regex;
use std::collections::HashMap;

/// Validates field constraints on already type-checked values.
pub struct ConstraintValidator {
    /// Cache of compiled regex patterns
    regex_cache: HashMap<String, Regex>,
}

impl ConstraintValidator {
    /// Creates a new constraint validator.
    pub fn new() -> Self {
        Self {
            regex_cache: HashMap::new(),
        }
    }

    /// Validates every constraint of `field` against `value`.
    ///
    /// Returns a list of validation errors. An empty list indicates success.
    pub fn validate(&mut self, field: &FieldSpec, value: &Value) -> Vec<FieldError> {
        // Null values skip constraint checks (nullability is the type's job)
        if value.is_null() {
            return Vec::new();
        }

        field
            .constraints
            .iter()
            .filter_map(|constraint| self.validate_constraint(field, constraint, value))
            .collect()
    }

    /// Validates a single constraint on a field.
    fn validate_constraint(
        &mut self,
        field: &FieldSpec,
        constraint: &FieldConstraint,
        value: &Value,
    ) -> Option<FieldError> {
        match constraint {
            FieldConstraint::Range { .. } => {
                let bounds = constraint.bounds()?;
                let Some(number) = value.as_float() else {
                    return Some(FieldError::constraint(
                        &field.name,
                        format!(
                            "Range constraint requires numeric type, found {}",
                            value.type_name()
                        ),
                    ));
                };

                (!bounds.contains(number))
                    .then(|| FieldError::out_of_range(&field.name, number, bounds))
            }
            FieldConstraint::Pattern { regex } => self.validate_pattern(field, value, regex),
        }
    }

    /// Validates that a string value matches a regex pattern.
    fn validate_pattern(
        &mut self,
        field: &FieldSpec,
        value: &Value,
        pattern: &str,
    ) -> Option<FieldError> {
        let Some(text) = value.as_str() else {
            return Some(FieldError::constraint(
                &field.name,
                format!(
                    "Pattern constraint requires string type, found {}",
                    value.type_name()
                ),
            ));
        };

        let regex = match self.get_or_compile_regex(pattern) {
            Ok(r) => r,
            Err(e) => {
                return Some(FieldError::InvalidRegex {
                    field: field.name.clone(),
                    error: e.to_string(),
                });
            }
        };

        if regex.is_match(text) {
            return None;
        }

        Some(FieldError::PatternMismatch {
            field: field.name.clone(),
            value: text.to_string(),
            pattern: pattern.to_string(),
        })
    }

    /// Gets a compiled regex from cache or compiles and caches it.
    fn get_or_compile_regex(&mut self, pattern: &str) -> Result<&Regex, regex::Error> {
        if !self.regex_cache.contains_key(pattern) {
            let regex = Regex::new(pattern)?;
            self.regex_cache.insert(pattern.to_string(), regex);
        }
        Ok(&self.regex_cache[pattern])
    }
}

impl Default for ConstraintValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use records_core::{FieldBuilder, FieldType, NumericBounds};

    #[test]
    fn test_range_valid() {
        let field = FieldBuilder::new("cgpa", FieldType::Float).gt(0.0).lt(10.0).build();
        let mut validator = ConstraintValidator::new();

        let errors = validator.validate(&field, &Value::Float(9.0));
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_range_invalid() {
        let field = FieldBuilder::new("cgpa", FieldType::Float).gt(0.0).lt(10.0).build();
        let mut validator = ConstraintValidator::new();

        let errors = validator.validate(&field, &Value::Float(12.0));
        assert_eq!(
            errors,
            vec![FieldError::OutOfRange {
                field: "cgpa".to_string(),
                value: 12.0,
                bounds: NumericBounds::between(0.0, 10.0),
            }]
        );
    }

    #[test]
    fn test_range_bounds_are_exclusive() {
        let field = FieldBuilder::new("cgpa", FieldType::Float).gt(0.0).lt(10.0).build();
        let mut validator = ConstraintValidator::new();

        assert_eq!(validator.validate(&field, &Value::Float(0.0)).len(), 1);
        assert_eq!(validator.validate(&field, &Value::Float(10.0)).len(), 1);
    }

    #[test]
    fn test_range_on_integer() {
        let field = FieldBuilder::new("age", FieldType::Integer).gt(0.0).build();
        let mut validator = ConstraintValidator::new();

        assert!(validator.validate(&field, &Value::Int(32)).is_empty());
        assert_eq!(validator.validate(&field, &Value::Int(-1)).len(), 1);
    }

    #[test]
    fn test_pattern_valid() {
        let field = FieldBuilder::new("url", FieldType::String)
            .pattern(r"^https?://.*")
            .build();
        let mut validator = ConstraintValidator::new();

        let errors = validator.validate(&field, &Value::from("https://example.com"));
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_pattern_invalid() {
        let field = FieldBuilder::new("url", FieldType::String)
            .pattern(r"^https?://.*")
            .build();
        let mut validator = ConstraintValidator::new();

        let errors = validator.validate(&field, &Value::from("not-a-url"));
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], FieldError::PatternMismatch { .. }));
    }

    #[test]
    fn test_invalid_regex() {
        let field = FieldBuilder::new("test", FieldType::String)
            .pattern("[invalid(regex")
            .build();
        let mut validator = ConstraintValidator::new();

        let errors = validator.validate(&field, &Value::from("test"));
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], FieldError::InvalidRegex { .. }));
    }

    #[test]
    fn test_range_on_string_value() {
        let field = FieldBuilder::new("name", FieldType::String).lt(3.0).build();
        let mut validator = ConstraintValidator::new();

        let errors = validator.validate(&field, &Value::from("abc"));
        assert!(matches!(errors[0], FieldError::ConstraintViolation { .. }));
    }

    #[test]
    fn test_null_values_skipped() {
        let field = FieldBuilder::new("age", FieldType::optional(FieldType::Integer))
            .gt(0.0)
            .build();
        let mut validator = ConstraintValidator::new();

        let errors = validator.validate(&field, &Value::Null);
        assert_eq!(errors.len(), 0); // Null values skip constraint checks
    }

    #[test]
    fn test_regex_cache_reused() {
        let field = FieldBuilder::new("code", FieldType::String)
            .pattern("^[A-Z]{3}$")
            .build();
        let mut validator = ConstraintValidator::new();

        assert!(validator.validate(&field, &Value::from("ABC")).is_empty());
        assert_eq!(validator.validate(&field, &Value::from("abcd")).len(), 1);
        assert_eq!(validator.regex_cache.len(), 1);
    }
}
