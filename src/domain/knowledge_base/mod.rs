//! Knowledge base domain - fixed FAQ documents

mod category;
mod document;
mod reference;
mod store;
mod validation;

pub use category::Category;
pub use document::Document;
pub use reference::admissions_documents;
pub use store::KnowledgeStore;
pub use validation::{validate_document_id, KnowledgeStoreError};
