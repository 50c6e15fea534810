//! Question answering endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, AskRequest, AskResponse};

/// POST /v1/ask
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = payload?;

    if request.query.trim().is_empty() {
        return Err(ApiError::bad_request("Query cannot be empty").with_param("query"));
    }

    let resolution = state.resolver.resolve(&request.query);

    info!(
        query_len = request.query.len(),
        documents = resolution.document_ids.len(),
        source = ?resolution.source,
        "Answered question"
    );

    Ok(Json(resolution.into()))
}
