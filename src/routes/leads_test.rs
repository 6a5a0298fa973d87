use super::*;
use crate::engine::LeadEngine;
use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::Request;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

// =========================================================================
// MockEngine
// =========================================================================

struct MockEngine {
    queries: Mutex<Vec<String>>,
    reply: fn() -> Result<Value, EngineError>,
}

impl MockEngine {
    fn new(reply: fn() -> Result<Value, EngineError>) -> Arc<Self> {
        Arc::new(Self { queries: Mutex::new(Vec::new()), reply })
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LeadEngine for MockEngine {
    async fn search(&self, query: &str) -> Result<Value, EngineError> {
        self.queries.lock().unwrap().push(query.to_owned());
        (self.reply)()
    }
}

fn request(query: &str) -> Result<Json<LeadSearchRequest>, JsonRejection> {
    Ok(Json(LeadSearchRequest { query: query.to_owned() }))
}

/// Run a raw body through the same extractor the router uses.
async fn extract(body: &'static str) -> Result<Json<LeadSearchRequest>, JsonRejection> {
    let req = Request::builder()
        .method("POST")
        .uri("/add_leads")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    Json::<LeadSearchRequest>::from_request(req, &()).await
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =========================================================================
// add_leads
// =========================================================================

#[tokio::test]
async fn relays_engine_leads_verbatim() {
    let engine = MockEngine::new(|| Ok(json!({ "message": [{ "landing_page": "https://x.test" }] })));
    let state = AppState::new(Some(engine.clone()));

    let response = add_leads(State(state), request("  scarpe running ")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({ "message": [{ "landing_page": "https://x.test" }] }));
    assert_eq!(engine.queries(), vec!["scarpe running".to_owned()]);
}

#[tokio::test]
async fn relays_engine_error_payload_with_ok_status() {
    let engine = MockEngine::new(|| Ok(json!({ "error": "quota exceeded" })));
    let response = add_leads(State(AppState::new(Some(engine))), request("hotel")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({ "error": "quota exceeded" }));
}

#[tokio::test]
async fn blank_query_is_rejected_before_the_engine() {
    let engine = MockEngine::new(|| Ok(json!({ "message": [] })));
    let response = add_leads(State(AppState::new(Some(engine.clone()))), request("   ")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({ "error": "Inserisci una query valida" }));
    assert!(engine.queries().is_empty());
}

#[tokio::test]
async fn bodies_without_a_query_are_rejected_like_blank_ones() {
    for raw in [r#"{}"#, r#"{"query":null}"#, r#"{"query":42}"#, "not json"] {
        let engine = MockEngine::new(|| Ok(json!({ "message": [] })));
        let body = extract(raw).await;
        assert!(body.is_err(), "{raw} should not decode");

        let response = add_leads(State(AppState::new(Some(engine.clone()))), body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{raw}");
        let reply: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(reply, json!({ "error": "Inserisci una query valida" }));
        assert!(engine.queries().is_empty());
    }
}

#[tokio::test]
async fn decoded_body_reaches_the_engine() {
    let engine = MockEngine::new(|| Ok(json!({ "message": [] })));
    let body = extract(r#"{"query":" ristoranti "}"#).await;
    let response = add_leads(State(AppState::new(Some(engine.clone()))), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(engine.queries(), vec!["ristoranti".to_owned()]);
}

#[tokio::test]
async fn missing_engine_answers_service_unavailable() {
    let response = add_leads(State(AppState::new(None)), request("palestre")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_text(response).await, "lead engine not configured");
}

#[tokio::test]
async fn engine_failure_answers_bad_gateway_with_plain_text() {
    let engine = MockEngine::new(|| Err(EngineError::Status { status: 500, body: "boom".to_owned() }));
    let response = add_leads(State(AppState::new(Some(engine))), request("dentisti")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_text(response).await, "lead engine responded with status 500");
}

// =========================================================================
// engine_error_to_status
// =========================================================================

#[test]
fn engine_error_to_status_maps_every_variant() {
    assert_eq!(engine_error_to_status(&EngineError::NotConfigured), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(engine_error_to_status(&EngineError::Request("refused".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(engine_error_to_status(&EngineError::Decode("eof".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        engine_error_to_status(&EngineError::Status { status: 404, body: String::new() }),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        engine_error_to_status(&EngineError::HttpClientBuild("tls".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
