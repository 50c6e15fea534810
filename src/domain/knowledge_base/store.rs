//! Immutable, ordered document store

use std::collections::HashSet;

use super::category::Category;
use super::document::Document;
use super::reference::admissions_documents;
use super::validation::{validate_content, validate_document_id, KnowledgeStoreError};

/// Read-only ordered collection of documents
///
/// Constructed once at startup and shared behind an `Arc`. There are no
/// mutation operations, so concurrent readers need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    documents: Vec<Document>,
}

impl KnowledgeStore {
    /// Build a store, validating every document
    ///
    /// Fails on a blank ID, a duplicate ID, or empty content. IDs are
    /// otherwise free-form.
    /// An empty document list is accepted.
    pub fn new(documents: Vec<Document>) -> Result<Self, KnowledgeStoreError> {
        let mut seen = HashSet::with_capacity(documents.len());

        for doc in &documents {
            validate_document_id(doc.id())?;
            validate_content(doc.id(), doc.content())?;

            if !seen.insert(doc.id()) {
                return Err(KnowledgeStoreError::DuplicateId {
                    id: doc.id().to_string(),
                });
            }
        }

        Ok(Self { documents })
    }

    /// Store holding the built-in admissions documents
    pub fn admissions() -> Self {
        Self {
            documents: admissions_documents(),
        }
    }

    /// Documents in store order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id() == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Distinct categories present, in first-seen order
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();

        for doc in &self.documents {
            if !categories.contains(&doc.category()) {
                categories.push(doc.category());
            }
        }

        categories
    }
}
