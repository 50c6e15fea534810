//! Knowledge document entity

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A labeled FAQ document
///
/// Documents are immutable once built. Uniqueness of IDs and non-empty
/// content are enforced by [`super::KnowledgeStore::new`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    title: String,
    content: String,
    category: Category,
}

impl Document {
    /// Create a new document
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category,
        }
    }

    // Getters

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("3", "Fee Structure", "Hostel fees: 50,000", Category::Fees);

        assert_eq!(doc.id(), "3");
        assert_eq!(doc.title(), "Fee Structure");
        assert_eq!(doc.content(), "Hostel fees: 50,000");
        assert_eq!(doc.category(), Category::Fees);
    }

    #[test]
    fn test_document_deserialization() {
        let json = r#"{"id":"7","title":"Hostel","content":"Rooms are shared.","category":"general"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();

        assert_eq!(doc.id(), "7");
        assert_eq!(doc.category(), Category::General);
    }
}
