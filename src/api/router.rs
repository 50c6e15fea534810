use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Assistant API
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::{KnowledgeStore, Resolver, FALLBACK_MESSAGE, QUICK_QUESTIONS};

    fn resolver() -> Arc<Resolver> {
        Arc::new(Resolver::new(Arc::new(KnowledgeStore::admissions())))
    }

    fn app() -> Router {
        create_router(AppState::new(resolver()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    fn ask_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_ask_matches_resolver() {
        let query = "tell me about hostel fees";
        let (status, body) = send(ask_request(&json!({ "query": query }).to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"], resolver().answer(query));
        assert_eq!(body["source"], json!({"kind": "category", "category": "fees"}));
    }

    #[tokio::test]
    async fn test_ask_unknown_topic_returns_fallback() {
        let (status, body) = send(ask_request(r#"{"query": "xyz123 unrelated gibberish"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"], FALLBACK_MESSAGE);
        assert_eq!(body["documents"], json!([]));
    }

    #[tokio::test]
    async fn test_ask_blank_query_rejected() {
        let (status, body) = send(ask_request(r#"{"query": "   "}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["param"], "query");
    }

    #[tokio::test]
    async fn test_ask_malformed_json() {
        let (status, body) = send(ask_request("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_ask_missing_field() {
        let (status, body) = send(ask_request(r#"{"question": "fees"}"#)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_list_and_get_documents() {
        let (status, body) = send(get_request("/v1/documents")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["documents"].as_array().unwrap().len(), 5);
        assert_eq!(body["documents"][4]["category"], "contact");

        let (status, body) = send(get_request("/v1/documents/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Fee Structure");

        let (status, body) = send(get_request("/v1/documents/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_assistant_info() {
        let (status, body) = send(get_request("/v1/assistant")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["greeting"].as_str().unwrap().starts_with("Hello!"));
        assert_eq!(
            body["quick_questions"].as_array().unwrap().len(),
            QUICK_QUESTIONS.len()
        );
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (status, body) = send(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(get_request("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"][0]["name"], "knowledge_store");
        assert_eq!(body["checks"][0]["message"], "5 documents in 5 categories");

        let (status, _) = send(get_request("/live")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_request_id_echoed() {
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()["x-request-id"], "req-42");
    }
}
