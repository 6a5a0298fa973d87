//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-request state; it only holds the engine client.

use std::sync::Arc;

use crate::engine::LeadEngine;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Lead engine client. `None` if `LEAD_ENGINE_URL` is not configured.
    pub engine: Option<Arc<dyn LeadEngine>>,
}

impl AppState {
    #[must_use]
    pub fn new(engine: Option<Arc<dyn LeadEngine>>) -> Self {
        Self { engine }
    }
}
