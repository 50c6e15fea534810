//! Knowledge store sources

mod factory;
mod file;

pub use factory::KnowledgeStoreFactory;
pub use file::{load_knowledge_store, parse_knowledge_store, KnowledgeFileFormat};
