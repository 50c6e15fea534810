//! Request and response bodies for the assistant endpoints

use serde::{Deserialize, Serialize};

use crate::domain::{AnswerSource, Category, Document, Resolution};

/// Body of `POST /v1/ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Answer to a single question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub source: AnswerSource,
    /// IDs of the documents retrieved for the query
    pub documents: Vec<String>,
}

impl From<Resolution> for AskResponse {
    fn from(resolution: Resolution) -> Self {
        Self {
            answer: resolution.answer,
            source: resolution.source,
            documents: resolution.document_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
}

impl From<&Document> for DocumentResponse {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id().to_string(),
            title: doc.title().to_string(),
            content: doc.content().to_string(),
            category: doc.category(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsResponse {
    pub documents: Vec<DocumentResponse>,
}

/// Greeting and suggested questions for a chat front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantInfoResponse {
    pub greeting: String,
    pub quick_questions: Vec<String>,
}
