//! Assistant metadata endpoint

use axum::Json;

use crate::api::types::AssistantInfoResponse;
use crate::domain::{GREETING, QUICK_QUESTIONS};

/// GET /v1/assistant
pub async fn assistant_info() -> Json<AssistantInfoResponse> {
    Json(AssistantInfoResponse {
        greeting: GREETING.to_string(),
        quick_questions: QUICK_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
}
