//! Wire DTOs for the lead-search endpoint.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the lead engine produces. Every field of a
//! lead is optional on the wire; deciding what an absent or placeholder
//! value means is the normalizer's job, not the decoder's.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body for `POST /add_leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSearchRequest {
    pub query: String,
}

/// One result as returned by the lead engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLead {
    /// Ads-library link, or the `"Non disponibile"` placeholder.
    #[serde(default)]
    pub ad_link: Option<String>,
    /// Advertiser landing page. Always rendered as a link.
    #[serde(default)]
    pub landing_page: String,
    /// Contact email, or the `"Non trovata"` placeholder.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone, or the `"Non trovato"` placeholder.
    #[serde(default)]
    pub telefono: Option<String>,
    /// Free-text copy-quality label (e.g. `"Copy molto interessante"`).
    #[serde(default)]
    pub copy_valutazione: Option<String>,
}

/// Response body of `POST /add_leads`.
///
/// Exactly one of the fields is expected to be populated; the interpreter
/// decides what to do when neither or both are.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<Vec<RawLead>>,
}
