//! Keyword-overlap retrieval

use std::collections::BTreeSet;

use crate::domain::knowledge_base::Document;

/// Maximum number of documents returned by [`find_relevant`]
pub const MAX_RELEVANT_DOCUMENTS: usize = 3;

/// Lowercase the query and split it on whitespace into distinct tokens
pub fn tokenize(query: &str) -> BTreeSet<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Documents whose lowercased title or content contains any query token
///
/// Store order is preserved and the result is cut at
/// [`MAX_RELEVANT_DOCUMENTS`]. A query without tokens matches nothing.
pub fn find_relevant<'a>(query: &str, documents: &'a [Document]) -> Vec<&'a Document> {
    let tokens = tokenize(query);

    if tokens.is_empty() {
        return Vec::new();
    }

    documents
        .iter()
        .filter(|doc| matches_any(doc, &tokens))
        .take(MAX_RELEVANT_DOCUMENTS)
        .collect()
}

fn matches_any(doc: &Document, tokens: &BTreeSet<String>) -> bool {
    let content = doc.content().to_lowercase();
    let title = doc.title().to_lowercase();

    tokens
        .iter()
        .any(|token| content.contains(token.as_str()) || title.contains(token.as_str()))
}
