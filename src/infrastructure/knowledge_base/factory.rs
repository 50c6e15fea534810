//! Knowledge store factory

use std::sync::Arc;

use tracing::info;

use crate::config::AssistantConfig;
use crate::domain::knowledge_base::KnowledgeStore;
use crate::domain::DomainError;

use super::file::load_knowledge_store;

/// Builds the process-wide knowledge store
#[derive(Debug)]
pub struct KnowledgeStoreFactory;

impl KnowledgeStoreFactory {
    /// Load the configured knowledge file, or the built-in admissions
    /// documents when none is set
    pub fn create(config: &AssistantConfig) -> Result<Arc<KnowledgeStore>, DomainError> {
        let store = match &config.knowledge_file {
            Some(path) => load_knowledge_store(path)?,
            None => {
                info!("Using built-in admissions documents");
                KnowledgeStore::admissions()
            }
        };

        Ok(Arc::new(store))
    }
}
