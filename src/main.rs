mod config;
mod engine;
mod routes;
mod state;

use std::sync::Arc;

use engine::LeadEngine;
use engine::http::HttpLeadEngine;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");

    // Lead search is disabled, not fatal, when the engine is missing.
    let engine: Option<Arc<dyn LeadEngine>> = match config.engine.as_ref() {
        Some(engine_config) => match HttpLeadEngine::new(engine_config) {
            Ok(client) => {
                tracing::info!(url = client.url(), "lead engine client initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "lead engine client failed to build; lead search disabled");
                None
            }
        },
        None => {
            tracing::warn!("LEAD_ENGINE_URL not set; lead search disabled");
            None
        }
    };

    let state = state::AppState::new(engine);
    let app = routes::leptos_app(state).expect("router build failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "leadscout listening");
    axum::serve(listener, app).await.expect("server failed");
}
