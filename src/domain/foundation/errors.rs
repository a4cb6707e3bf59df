//! Error types shared across the domain.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Rejected input while building a value object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("{field} is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField { field: field.into() }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field } | Self::InvalidFormat { field, .. } => field,
        }
    }
}

/// Machine-readable category carried by [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyField,
    InvalidFormat,
    StorageError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyField => "EMPTY_FIELD",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::StorageError => "STORAGE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error surfaced at the API boundary: a code, a message, and string details.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let field = err.field().to_string();
        Self::new(code, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ValidationError::empty_field("landmark_id").to_string(),
            "landmark_id must not be empty"
        );
        assert_eq!(
            ValidationError::invalid_format("image_base64", "bad padding").to_string(),
            "image_base64 is malformed: bad padding"
        );
    }

    #[test]
    fn domain_error_display_includes_code() {
        let err = DomainError::new(ErrorCode::StorageError, "disk full");
        assert_eq!(err.to_string(), "[STORAGE_ERROR] disk full");
    }

    #[test]
    fn validation_converts_with_field_detail() {
        let err: DomainError = ValidationError::invalid_format("mime_type", "text/plain").into();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details["field"], "mime_type");
    }
}
