//! Admissions FAQ Assistant
//!
//! Answers college admissions questions from a small fixed set of documents:
//! - Keyword-overlap retrieval over an immutable knowledge store
//! - Ordered keyword rules that pick the answer's category
//! - A fixed fallback reply when nothing matches
//!
//! The resolver is exposed through a CLI (one-shot and interactive chat) and
//! an HTTP API.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::Resolver;
use infrastructure::knowledge_base::KnowledgeStoreFactory;
use tracing::info;

/// Build the resolver over the configured knowledge store
pub fn create_resolver(config: &AppConfig) -> anyhow::Result<Arc<Resolver>> {
    let store = KnowledgeStoreFactory::create(&config.assistant)?;
    info!(documents = store.len(), "Knowledge store ready");

    Ok(Arc::new(Resolver::new(store)))
}

/// Create the application state with all services initialized
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    Ok(AppState::new(create_resolver(config)?))
}
