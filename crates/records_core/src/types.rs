//! Field type expressions.
//!
//! A [`FieldType`] is written in schema files as a short type expression:
//!
//! | Expression            | Meaning                                   |
//! |-----------------------|-------------------------------------------|
//! | `string`, `str`       | Any string                                |
//! | `integer`, `int`      | 64-bit signed integer                     |
//! | `float`, `double`     | 64-bit float (integers are widened)       |
//! | `boolean`, `bool`     | `true` or `false`                         |
//! | `email`               | String that must be a valid email address |
//! | `enum<pos\|neg>`      | String equal to one of the variants       |
//! | `list<T>`             | List whose elements are all `T`           |
//! | `optional<T>`         | `T` or null                               |
//!
//! Keywords are case-insensitive; enum variants are case-sensitive.

use crate::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The type of a single record field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    /// Any string
    String,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Float,
    /// Boolean
    Boolean,
    /// Format-validated email address
    Email,
    /// Enumerated string with the allowed variants
    Enum(Vec<String>),
    /// Homogeneous list
    List(Box<FieldType>),
    /// Nullable wrapper
    Optional(Box<FieldType>),
}

impl FieldType {
    /// Wraps a type so that null is accepted.
    pub fn optional(inner: FieldType) -> Self {
        FieldType::Optional(Box::new(inner))
    }

    /// Creates a list type of the given element type.
    pub fn list(element: FieldType) -> Self {
        FieldType::List(Box::new(element))
    }

    /// Creates an enumerated string type.
    pub fn enumeration<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldType::Enum(variants.into_iter().map(Into::into).collect())
    }

    /// Returns true if null is a valid value of this type.
    pub fn is_optional(&self) -> bool {
        matches!(self, FieldType::Optional(_))
    }

    /// Returns the type with any optional wrapper removed.
    pub fn non_null(&self) -> &FieldType {
        match self {
            FieldType::Optional(inner) => inner.non_null(),
            other => other,
        }
    }

    /// Returns true for integer and float types (optional or not).
    pub fn is_numeric(&self) -> bool {
        matches!(self.non_null(), FieldType::Integer | FieldType::Float)
    }

    /// Returns true for types whose values are strings (optional or not).
    pub fn is_string_like(&self) -> bool {
        matches!(
            self.non_null(),
            FieldType::String | FieldType::Email | FieldType::Enum(_)
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Integer => f.write_str("integer"),
            FieldType::Float => f.write_str("float"),
            FieldType::Boolean => f.write_str("boolean"),
            FieldType::Email => f.write_str("email"),
            FieldType::Enum(variants) => write!(f, "enum<{}>", variants.join("|")),
            FieldType::List(element) => write!(f, "list<{}>", element),
            FieldType::Optional(inner) => write!(f, "optional<{}>", inner),
        }
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let expr = input.trim();

        let Some(open) = expr.find('<') else {
            return match expr.to_lowercase().as_str() {
                "string" | "str" => Ok(FieldType::String),
                "integer" | "int" | "int64" | "long" => Ok(FieldType::Integer),
                "float" | "float64" | "double" => Ok(FieldType::Float),
                "boolean" | "bool" => Ok(FieldType::Boolean),
                "email" => Ok(FieldType::Email),
                "" => Err(SchemaError::invalid_type(input, "empty type expression")),
                other => Err(SchemaError::invalid_type(
                    input,
                    format!("unknown type '{}'", other),
                )),
            };
        };

        let inner = expr[open + 1..]
            .strip_suffix('>')
            .ok_or_else(|| SchemaError::invalid_type(input, "missing closing '>'"))?;
        let head = expr[..open].trim().to_lowercase();

        match head.as_str() {
            "list" | "array" => Ok(FieldType::list(inner.parse()?)),
            "optional" | "option" => {
                let inner: FieldType = inner.parse()?;
                if inner.is_optional() {
                    return Err(SchemaError::invalid_type(input, "nested optional"));
                }
                Ok(FieldType::optional(inner))
            }
            "enum" => {
                let variants: Vec<String> = inner
                    .split('|')
                    .map(|v| v.trim().to_string())
                    .collect();
                if variants.iter().any(String::is_empty) {
                    return Err(SchemaError::invalid_type(input, "empty enum variant"));
                }
                Ok(FieldType::Enum(variants))
            }
            other => Err(SchemaError::invalid_type(
                input,
                format!("unknown type constructor '{}'", other),
            )),
        }
    }
}

impl TryFrom<String> for FieldType {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.to_string()
    }
}
