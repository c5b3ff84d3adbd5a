// Validation Module - field-level form validation
use std::fmt;

mod validators;

pub use validators::{FieldValidator, RequiredValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Names of the fields that failed, in the order they were checked
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "{}: {}", self.errors[0].field, self.errors[0].message)?;
        } else {
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Collects field errors across one form submission
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add_field_error(field, message);
    }

    /// Validate a field with a specific validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V) -> &mut Self
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        if let Err(msg) = validator.validate(value) {
            self.add_error(field, msg);
        }
        self
    }

    /// Require a value to be present (non-empty, whitespace counts as
    /// present)
    pub fn require(&mut self, field: &str, value: &str) -> &mut Self {
        self.validate_field(field, value, &RequiredValidator)
    }

    /// Check if any errors were collected
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get number of collected errors
    pub fn error_count(&self) -> usize {
        self.errors.error_count()
    }

    /// Borrow the collected errors
    pub fn errors(&self) -> &ValidationError {
        &self.errors
    }

    /// Finish validation
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_collects_every_missing_field() {
        let mut validator = Validator::new();
        validator.require("firstName", "").require("email", "").require("phone", "123");

        assert_eq!(validator.error_count(), 2);
        let err = validator.finalize().unwrap_err();
        assert_eq!(err.fields(), vec!["firstName", "email"]);
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut validator = Validator::new();
        validator.require("firstName", " ");
        assert!(validator.finalize().is_ok());
    }

    #[test]
    fn display_joins_field_errors() {
        let mut err = ValidationError::field("firstName", "is required");
        assert_eq!(err.to_string(), "firstName: is required");
        err.add_field_error("email", "is required");
        assert_eq!(err.to_string(), "firstName: is required; email: is required");
        assert_eq!(err.field_errors("email").len(), 1);
    }
}
