//! Validation error types.
//!
//! Raised when a learner profile or content record is constructed (directly,
//! through `FromStr`, or through deserialization) with a field outside its
//! allowed range or set of values. Once a value exists, the core pipelines
//! never fail.

use thiserror::Error;

/// A field failed a range, enum, or presence constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric field fell outside its inclusive range.
    #[error("invalid {field}: must be {constraint}, got {value}")]
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
        value: i64,
    },

    /// A string field did not name one of the allowed variants.
    #[error("invalid {field}: expected one of {expected}, got '{value}'")]
    UnknownVariant {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A required string field was empty or whitespace.
    #[error("invalid {field}: must not be empty")]
    Empty { field: &'static str },
}

impl ValidationError {
    /// The name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::UnknownVariant { field, .. }
            | ValidationError::Empty { field } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_field_and_constraint() {
        let err = ValidationError::OutOfRange {
            field: "age",
            constraint: "between 4 and 25",
            value: 30,
        };
        assert_eq!(err.to_string(), "invalid age: must be between 4 and 25, got 30");
        assert_eq!(err.field(), "age");

        let err = ValidationError::UnknownVariant {
            field: "difficulty",
            expected: "beginner, intermediate, advanced",
            value: "expert".into(),
        };
        assert!(err.to_string().contains("difficulty"));
        assert!(err.to_string().contains("'expert'"));
    }
}
