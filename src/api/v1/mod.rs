//! Versioned assistant API

pub mod assistant;
pub mod chat;
pub mod documents;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/ask", post(chat::ask))
        .route("/assistant", get(assistant::assistant_info))
        .route("/documents", get(documents::list_documents))
        .route("/documents/{document_id}", get(documents::get_document))
}
