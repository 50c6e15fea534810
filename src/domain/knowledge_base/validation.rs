//! Knowledge store validation utilities

use std::fmt;

/// Errors raised while building a knowledge store
#[derive(Debug, Clone, PartialEq)]
pub enum KnowledgeStoreError {
    /// ID is empty
    EmptyId,
    /// Two documents share an ID
    DuplicateId { id: String },
    /// Document has no content
    EmptyContent { id: String },
    /// Category name is not one of the known categories
    UnknownCategory { name: String },
}

impl fmt::Display for KnowledgeStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Document ID cannot be empty"),
            Self::DuplicateId { id } => write!(f, "Duplicate document ID '{}'", id),
            Self::EmptyContent { id } => write!(f, "Document '{}' has empty content", id),
            Self::UnknownCategory { name } => write!(f, "Unknown category '{}'", name),
        }
    }
}

impl std::error::Error for KnowledgeStoreError {}

/// Validate a document ID
///
/// Any non-blank string is accepted; uniqueness is checked by the store.
pub fn validate_document_id(id: &str) -> Result<(), KnowledgeStoreError> {
    if id.trim().is_empty() {
        return Err(KnowledgeStoreError::EmptyId);
    }

    Ok(())
}

/// Validate document content
pub fn validate_content(id: &str, content: &str) -> Result<(), KnowledgeStoreError> {
    if content.trim().is_empty() {
        return Err(KnowledgeStoreError::EmptyContent { id: id.to_string() });
    }

    Ok(())
}
