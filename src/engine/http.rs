//! HTTP client for the lead engine.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use client::net::types::LeadSearchRequest;
use serde_json::Value;

use super::{EngineError, LeadEngine};
use crate::config::EngineConfig;

pub struct HttpLeadEngine {
    http: reqwest::Client,
    url: String,
}

impl HttpLeadEngine {
    /// Build a client for the configured engine URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| EngineError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url.clone() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl LeadEngine for HttpLeadEngine {
    async fn search(&self, query: &str) -> Result<Value, EngineError> {
        let body = LeadSearchRequest { query: query.to_owned() };
        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EngineError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| EngineError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(EngineError::Status { status, body: text });
        }
        parse_engine_body(&text)
    }
}

fn parse_engine_body(text: &str) -> Result<Value, EngineError> {
    serde_json::from_str(text).map_err(|e| EngineError::Decode(e.to_string()))
}
