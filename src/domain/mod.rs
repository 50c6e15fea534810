//! Domain layer - Core business logic and entities

pub mod chat;
pub mod error;
pub mod knowledge_base;
pub mod resolver;

pub use chat::{ChatMessage, ChatSession, Sender, GREETING, QUICK_QUESTIONS};
pub use error::DomainError;
pub use knowledge_base::{Category, Document, KnowledgeStore, KnowledgeStoreError};
pub use resolver::{
    find_relevant, select_answer, AnswerSource, Resolution, Resolver, FALLBACK_MESSAGE,
    MAX_RELEVANT_DOCUMENTS,
};
