//! Builder pattern for creating record schemas.
//!
//! This module provides ergonomic builders for constructing schemas
//! and their fields with a fluent API.

use crate::{FieldConstraint, FieldSpec, FieldType, RecordSchema, SchemaError, Value};

/// Builder for creating a [`RecordSchema`].
///
/// # Example
///
/// ```rust
/// use records_core::{FieldBuilder, FieldType, SchemaBuilder};
///
/// let schema = SchemaBuilder::new("Review")
///     .description("Structured product review")
///     .field(FieldBuilder::new("summary", FieldType::String).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.name(), "Review");
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    name: String,
    description: Option<String>,
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Creates a new schema builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the schema description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a field to the schema.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds multiple fields to the schema.
    pub fn fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Builds the schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] if two fields share a name.
    pub fn build(self) -> Result<RecordSchema, SchemaError> {
        let schema = RecordSchema::new(self.name, self.fields)?;
        Ok(match self.description {
            Some(description) => schema.with_description(description),
            None => schema,
        })
    }
}

/// Builder for creating a [`FieldSpec`].
///
/// Fields are required by default. `gt`/`lt` accumulate into a single
/// range constraint.
///
/// # Example
///
/// ```rust
/// use records_core::{FieldBuilder, FieldType, NumericBounds};
///
/// let field = FieldBuilder::new("cgpa", FieldType::Float)
///     .gt(0.0)
///     .lt(10.0)
///     .description("cgpa must be between 0 to 10")
///     .build();
///
/// assert_eq!(field.bounds().next(), Some(NumericBounds::between(0.0, 10.0)));
/// ```
#[derive(Debug)]
pub struct FieldBuilder {
    spec: FieldSpec,
    min_exclusive: Option<f64>,
    max_exclusive: Option<f64>,
}

impl FieldBuilder {
    /// Creates a new field builder.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            spec: FieldSpec::new(name, field_type),
            min_exclusive: None,
            max_exclusive: None,
        }
    }

    /// Sets whether the field is required.
    pub fn required(mut self, required: bool) -> Self {
        self.spec.required = required;
        self
    }

    /// Marks the field as not required (absent keys become null).
    pub fn optional(self) -> Self {
        self.required(false)
    }

    /// Sets the default value.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.spec.default = Some(value.into());
        self
    }

    /// Sets the field description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = Some(description.into());
        self
    }

    /// Exclusive lower bound.
    pub fn gt(mut self, min: f64) -> Self {
        self.min_exclusive = Some(min);
        self
    }

    /// Exclusive upper bound.
    pub fn lt(mut self, max: f64) -> Self {
        self.max_exclusive = Some(max);
        self
    }

    /// Adds a regex pattern constraint.
    pub fn pattern(self, regex: impl Into<String>) -> Self {
        self.constraint(FieldConstraint::Pattern {
            regex: regex.into(),
        })
    }

    /// Adds a constraint to the field.
    pub fn constraint(mut self, constraint: FieldConstraint) -> Self {
        self.spec.constraints.push(constraint);
        self
    }

    /// Builds the field.
    pub fn build(mut self) -> FieldSpec {
        if self.min_exclusive.is_some() || self.max_exclusive.is_some() {
            self.spec.constraints.push(FieldConstraint::Range {
                min_exclusive: self.min_exclusive,
                max_exclusive: self.max_exclusive,
            });
        }
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumericBounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_builder_minimal() {
        let field = FieldBuilder::new("user_id", FieldType::String).build();

        assert_eq!(field.name, "user_id");
        assert_eq!(field.field_type, FieldType::String);
        assert!(field.required); // Default is required
        assert!(field.default.is_none());
        assert!(field.description.is_none());
        assert!(field.constraints.is_empty());
    }

    #[test]
    fn test_field_builder_full() {
        let field = FieldBuilder::new("email", FieldType::optional(FieldType::Email))
            .optional()
            .description("Contact address")
            .pattern(r"@example\.com$")
            .build();

        assert!(!field.required);
        assert_eq!(field.description, Some("Contact address".to_string()));
        assert_eq!(field.constraints.len(), 1);
    }

    #[test]
    fn test_gt_lt_merge_into_one_range() {
        let field = FieldBuilder::new("score", FieldType::Float)
            .gt(0.0)
            .lt(100.0)
            .build();

        assert_eq!(field.constraints.len(), 1);
        assert_eq!(
            field.bounds().collect::<Vec<_>>(),
            vec![NumericBounds::between(0.0, 100.0)]
        );
    }

    #[test]
    fn test_single_sided_bound() {
        let field = FieldBuilder::new("age", FieldType::Integer).gt(0.0).build();

        match &field.constraints[0] {
            FieldConstraint::Range {
                min_exclusive,
                max_exclusive,
            } => {
                assert_eq!(*min_exclusive, Some(0.0));
                assert_eq!(*max_exclusive, None);
            }
            _ => panic!("Expected Range constraint"),
        }
    }

    #[test]
    fn test_field_default_value() {
        let field = FieldBuilder::new("name", FieldType::String)
            .default("John")
            .build();

        assert_eq!(field.default, Some(Value::from("John")));
        assert!(field.required);
    }

    #[test]
    fn test_schema_builder() {
        let schema = SchemaBuilder::new("test")
            .description("Test schema")
            .field(FieldBuilder::new("id", FieldType::String).build())
            .fields(vec![
                FieldBuilder::new("name", FieldType::String).build(),
                FieldBuilder::new("active", FieldType::Boolean).build(),
            ])
            .build()
            .unwrap();

        assert_eq!(schema.description(), Some("Test schema"));
        assert_eq!(
            schema.field_names().collect::<Vec<_>>(),
            vec!["id", "name", "active"]
        );
    }

    #[test]
    fn test_schema_builder_duplicate() {
        let result = SchemaBuilder::new("test")
            .field(FieldBuilder::new("id", FieldType::String).build())
            .field(FieldBuilder::new("id", FieldType::Integer).build())
            .build();

        assert_eq!(result, Err(SchemaError::DuplicateField("id".to_string())));
    }
}
