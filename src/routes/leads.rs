//! Lead-search route.
//!
//! `POST /add_leads` validates the query the same way the browser does,
//! forwards it to the lead engine and relays the engine's JSON verbatim.
//! Failures below the payload level are answered with a non-2xx status and
//! a plain-text body, which the client treats as a transport error.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use std::time::Instant;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::LeadSearchRequest;
use client::state::query::{ValidationError, validate};

use crate::engine::EngineError;
use crate::state::AppState;

/// `POST /add_leads`: run one lead search through the engine.
///
/// A body that does not decode to a request (missing or null `query`, not
/// JSON at all) is answered like a blank query.
pub async fn add_leads(
    State(state): State<AppState>,
    body: Result<Json<LeadSearchRequest>, JsonRejection>,
) -> Response {
    let raw_query = match &body {
        Ok(Json(request)) => request.query.as_str(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "lead search body rejected");
            ""
        }
    };
    let query = match validate(raw_query) {
        Ok(query) => query,
        Err(e) => return invalid_query(&e),
    };
    let Some(engine) = state.engine.as_ref() else {
        tracing::warn!("lead search requested but no engine is configured");
        return engine_failure(&EngineError::NotConfigured);
    };

    let query_len = query.as_str().len();
    let started = Instant::now();
    match engine.search(query.as_str()).await {
        Ok(payload) => {
            tracing::info!(query_len, elapsed_ms = elapsed_ms(started), "lead search relayed");
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, query_len, elapsed_ms = elapsed_ms(started), "lead search failed");
            if let EngineError::Status { status, body } = &e {
                tracing::debug!(status, body = %body, "lead engine error body");
            }
            engine_failure(&e)
        }
    }
}

pub(crate) fn engine_error_to_status(err: &EngineError) -> StatusCode {
    match err {
        EngineError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        EngineError::Request(_) | EngineError::Status { .. } | EngineError::Decode(_) => StatusCode::BAD_GATEWAY,
        EngineError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn invalid_query(err: &ValidationError) -> Response {
    (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

fn engine_failure(err: &EngineError) -> Response {
    (engine_error_to_status(err), err.to_string()).into_response()
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
