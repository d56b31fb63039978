//! Validation error types

use std::fmt;

/// Validation error for create requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of a group of required fields is missing or empty
    MissingFields,

    /// A single required field is missing or empty
    Required { field: &'static str },

    /// Request body could not be read as JSON
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Missing required fields"),
            Self::Required { field } => write!(f, "{} is required", field),
            Self::MalformedBody { reason } => write!(f, "Invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Treats an absent or empty string the same way: as missing.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Missing required fields"
        );
        assert_eq!(
            ValidationError::Required { field: "Name" }.to_string(),
            "Name is required"
        );
    }

    #[test]
    fn empty_string_is_not_present() {
        assert_eq!(present(Some(String::new())), None);
        assert_eq!(present(None), None);
        assert_eq!(present(Some(" ".into())), Some(" ".into()));
    }
}
