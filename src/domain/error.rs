use thiserror::Error;

/// Core domain errors
///
/// One variant per failure tier the boundary knows how to render: validation
/// and credential failures become precise 4xx responses, inference failures
/// become 500s with a message, and `Internal` is the catch-all rendered with
/// full diagnostics.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("invalid or missing API key")]
    Credential,

    #[error("Inference error: {message}")]
    Inference { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let error = DomainError::validation("oxygen", "cannot coerce to a number");
        assert_eq!(error.to_string(), "oxygen: cannot coerce to a number");
    }

    #[test]
    fn test_inference_error() {
        let error = DomainError::inference("class index 7 has no label");
        assert_eq!(
            error.to_string(),
            "Inference error: class index 7 has no label"
        );
    }

    #[test]
    fn test_internal_error() {
        let error = DomainError::internal("artifact corrupted");
        assert_eq!(error.to_string(), "Internal error: artifact corrupted");
    }
}
