//! Field-level form validation.
//!
//! Validation is local and blocks submission; an invalid draft never
//! reaches the store.

use thiserror::Error;

/// Maximum length of a name field, in characters.
pub const NAME_LIMIT: usize = 25;

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is empty.
    #[error("{field} is Required")]
    Required {
        /// Display name of the field.
        field: &'static str,
    },

    /// The field exceeds its character limit.
    #[error("{limit} Character Limit")]
    TooLong {
        /// Display name of the field.
        field: &'static str,
        /// The limit that was exceeded.
        limit: usize,
    },
}

impl ValidationError {
    /// Returns the display name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field } => field,
            ValidationError::TooLong { field, .. } => field,
        }
    }
}

/// Validates a required name field against [`NAME_LIMIT`].
pub(crate) fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if value.chars().count() > NAME_LIMIT {
        return Err(ValidationError::TooLong {
            field,
            limit: NAME_LIMIT,
        });
    }
    Ok(())
}
