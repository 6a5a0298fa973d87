//! Lead engine: the external service that crawls the ads library and scores
//! leads.
//!
//! DESIGN
//! ======
//! The host does not scrape anything itself. `/add_leads` hands the query to
//! a [`LeadEngine`] and relays the JSON it gets back, so the reply contract
//! (`{error}` or `{message}`) is decided by the engine and interpreted by the
//! browser client.

pub mod http;

use serde_json::Value;

/// Errors produced while talking to the lead engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// No engine URL was configured.
    #[error("lead engine not configured")]
    NotConfigured,

    /// The HTTP request to the engine failed.
    #[error("lead engine request failed: {0}")]
    Request(String),

    /// The engine returned a non-success HTTP status.
    #[error("lead engine responded with status {status}")]
    Status { status: u16, body: String },

    /// The engine body was not JSON.
    #[error("lead engine response is not JSON: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Forwards one lead search to the engine.
#[async_trait::async_trait]
pub trait LeadEngine: Send + Sync {
    /// Run a search and return the engine's JSON reply unchanged.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine is unreachable, answers with
    /// a non-success status, or does not return JSON.
    async fn search(&self, query: &str) -> Result<Value, EngineError>;
}
