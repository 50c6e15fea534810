//! Query resolution - keyword retrieval followed by rule-based answer selection
//!
//! ```text
//! query ──► find_relevant (≤ 3 docs, store order) ──► select (rule table) ──► answer
//!                                  │ empty                        │ no doc for category
//!                                  ▼                              ▼
//!                          FALLBACK_MESSAGE               first relevant doc
//! ```

mod retrieval;
mod selection;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::knowledge_base::{Category, KnowledgeStore};

pub use retrieval::{find_relevant, tokenize, MAX_RELEVANT_DOCUMENTS};
pub use selection::{
    matching_rule, select, select_answer, CategoryRule, Selection, CATEGORY_RULES,
    FALLBACK_MESSAGE,
};

/// How an answer was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum AnswerSource {
    /// No relevant document; the fixed fallback message
    Fallback,
    /// Document picked by a category rule
    Category(Category),
    /// First relevant document
    Default,
}

/// Result of resolving one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub answer: String,
    pub source: AnswerSource,
    /// IDs of the retrieved documents, in store order
    pub document_ids: Vec<String>,
}

/// Answers free-text questions from a shared knowledge store
///
/// Resolution is pure: the same query against the same store always yields
/// the same answer, and it never fails.
#[derive(Debug, Clone)]
pub struct Resolver {
    store: Arc<KnowledgeStore>,
}

impl Resolver {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Resolve a query, reporting which documents and which path were used
    pub fn resolve(&self, query: &str) -> Resolution {
        let relevant = find_relevant(query, self.store.documents());
        let selection = select(query, &relevant);

        let source = match selection {
            Selection::Fallback => AnswerSource::Fallback,
            Selection::Categorized { category, .. } => AnswerSource::Category(category),
            Selection::Default { .. } => AnswerSource::Default,
        };

        let document_ids: Vec<String> = relevant.iter().map(|d| d.id().to_string()).collect();

        debug!(
            tokens = tokenize(query).len(),
            documents = ?document_ids,
            source = ?source,
            "Resolved query"
        );

        Resolution {
            answer: selection.answer().to_string(),
            source,
            document_ids,
        }
    }

    /// Reply text for a query
    pub fn answer(&self, query: &str) -> String {
        self.resolve(query).answer
    }
}
