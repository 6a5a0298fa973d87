//! HTTP transport for the lead-search endpoint.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`, optionally raced
//! against a `gloo-timers` deadline.
//! Server-side (SSR) and native tests: the transport reports itself as
//! unavailable, since the call is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure below the payload level (network, HTTP status, body that is
//! not JSON, deadline) comes back as a [`TransportError`] so the controller
//! can settle the cycle instead of leaving the submit control disabled.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

#[cfg(any(test, feature = "hydrate"))]
use super::types::LeadSearchRequest;

/// Path of the lead-search endpoint served by the host.
pub const LEAD_SEARCH_ENDPOINT: &str = "/add_leads";

/// Failures that happen at or below the call boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The body was JSON but matched neither `{error}` nor `{message}`.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// No response arrived before the configured deadline.
    #[error("no response after {0} ms")]
    Timeout(u32),
}

/// The single network seam of the search pipeline.
///
/// Implementations send `{ "query": <query> }` as JSON to `endpoint` and
/// return the decoded response body.
#[allow(async_fn_in_trait)]
pub trait LeadTransport {
    /// Issue one lead-search call.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the call fails below the payload
    /// level.
    async fn post_query(&self, endpoint: &str, query: &str) -> Result<Value, TransportError>;
}

/// Browser transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HttpTransport {
    timeout_ms: Option<u32>,
}

impl HttpTransport {
    #[must_use]
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }
}

impl LeadTransport for HttpTransport {
    async fn post_query(&self, endpoint: &str, query: &str) -> Result<Value, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let request = Box::pin(send_query(endpoint, query));
            let Some(ms) = self.timeout_ms else {
                return request.await;
            };
            let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(ms));
            // Dropping the losing request future discards any late response.
            match select(request, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::Timeout(ms)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, query, self.timeout_ms);
            Err(TransportError::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn search_request_body(query: &str) -> LeadSearchRequest {
    LeadSearchRequest { query: query.to_owned() }
}

#[cfg(feature = "hydrate")]
async fn send_query(endpoint: &str, query: &str) -> Result<Value, TransportError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(&search_request_body(query))
        .map_err(|e| TransportError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(TransportError::Status(resp.status()));
    }
    resp.json::<Value>()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}
