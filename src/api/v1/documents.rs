//! Knowledge document endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::state::AppState;
use crate::api::types::{ApiError, DocumentResponse, DocumentsResponse};
use crate::domain::DomainError;

/// GET /v1/documents
pub async fn list_documents(State(state): State<AppState>) -> Json<DocumentsResponse> {
    let documents = state
        .knowledge_store()
        .documents()
        .iter()
        .map(DocumentResponse::from)
        .collect();

    Json(DocumentsResponse { documents })
}

/// GET /v1/documents/{document_id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let document = state
        .knowledge_store()
        .get(&document_id)
        .ok_or_else(|| DomainError::not_found(format!("Document '{}' not found", document_id)))?;

    Ok(Json(DocumentResponse::from(document)))
}
