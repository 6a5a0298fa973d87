//! Search configuration and presentation options.
//!
//! DESIGN
//! ======
//! The card layouts that used to live side by side (plain list, cards with
//! status dots, cards without) differ only in presentation, so one renderer
//! reads these flags instead of keeping parallel code paths.

use crate::net::api::LEAD_SEARCH_ENDPOINT;

/// How copy-quality labels are matched against the known phrases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassificationStrictness {
    /// The whole label must equal a known label (ignoring case and
    /// surrounding whitespace).
    Exact,
    /// The label only has to contain a known phrase.
    #[default]
    Substring,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentationOptions {
    /// Show a found/missing dot next to email and phone.
    pub show_status_indicators: bool,
    pub classification: ClassificationStrictness,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self { show_status_indicators: true, classification: ClassificationStrictness::Substring }
    }
}

/// Client-side search settings, provided as Leptos context by `App`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub endpoint: String,
    /// `None` waits for the call to finish or fail on its own.
    pub timeout_ms: Option<u32>,
    pub presentation: PresentationOptions,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { endpoint: LEAD_SEARCH_ENDPOINT.to_owned(), timeout_ms: None, presentation: PresentationOptions::default() }
    }
}
