//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
/// Lead searches crawl the ads library, so the engine gets a long deadline.
pub const DEFAULT_ENGINE_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_ENGINE_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where and how to reach the external lead engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub url: String,
    pub timeouts: EngineTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// `None` disables lead search; `/add_leads` then answers 503.
    pub engine: Option<EngineConfig>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEAD_ENGINE_URL`: full URL the lead-search body is forwarded to
    /// - `LEAD_ENGINE_TIMEOUT_SECS`: default 300
    /// - `LEAD_ENGINE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a port number or `LEAD_ENGINE_URL`
    /// is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let engine = match lookup("LEAD_ENGINE_URL").map(|raw| raw.trim().to_owned()) {
            Some(url) if !url.is_empty() => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::Invalid { var: "LEAD_ENGINE_URL", value: url });
                }
                let timeouts = EngineTimeouts {
                    request_secs: parse_u64(&lookup, "LEAD_ENGINE_TIMEOUT_SECS", DEFAULT_ENGINE_TIMEOUT_SECS),
                    connect_secs: parse_u64(
                        &lookup,
                        "LEAD_ENGINE_CONNECT_TIMEOUT_SECS",
                        DEFAULT_ENGINE_CONNECT_TIMEOUT_SECS,
                    ),
                };
                Some(EngineConfig { url: url.trim_end_matches('/').to_owned(), timeouts })
            }
            _ => None,
        };

        Ok(Self { port, engine })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
