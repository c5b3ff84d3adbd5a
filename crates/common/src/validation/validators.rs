// Field validators

/// A check applied to one field value
pub trait FieldValidator<T: ?Sized> {
    /// Validate the value, returning the user-facing message on failure
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Rejects empty strings and nothing else
///
/// No trimming and no format checks: `" "` passes, and so does any email
/// shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl FieldValidator<str> for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("is required".to_string())
        } else {
            Ok(())
        }
    }
}

impl FieldValidator<String> for RequiredValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        <Self as FieldValidator<str>>::validate(self, value.as_str())
    }
}

impl<T> FieldValidator<Option<T>> for RequiredValidator
where
    RequiredValidator: FieldValidator<T>,
{
    fn validate(&self, value: &Option<T>) -> Result<(), String> {
        match value {
            Some(inner) => <Self as FieldValidator<T>>::validate(self, inner),
            None => Err("is required".to_string()),
        }
    }
}
