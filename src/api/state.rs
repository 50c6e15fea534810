//! Application state shared by handlers

use std::sync::Arc;

use crate::domain::{KnowledgeStore, Resolver};

/// Application state; cloning only bumps reference counts
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
}

impl AppState {
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self { resolver }
    }

    pub fn knowledge_store(&self) -> &KnowledgeStore {
        self.resolver.store()
    }
}
