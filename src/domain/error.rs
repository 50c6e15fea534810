use thiserror::Error;

use super::knowledge_base::KnowledgeStoreError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn knowledge_base(message: impl Into<String>) -> Self {
        Self::KnowledgeBase(message.into())
    }
}

impl From<KnowledgeStoreError> for DomainError {
    fn from(err: KnowledgeStoreError) -> Self {
        Self::knowledge_base(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Document '9' not found");
        assert_eq!(error.to_string(), "Not found: Document '9' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Message cannot be empty");
        assert_eq!(error.to_string(), "Validation error: Message cannot be empty");
    }

    #[test]
    fn test_knowledge_store_error_conversion() {
        let error: DomainError = KnowledgeStoreError::DuplicateId { id: "2".into() }.into();
        assert_eq!(
            error.to_string(),
            "Knowledge base error: Duplicate document ID '2'"
        );
    }
}
