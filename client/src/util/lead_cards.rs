//! Card rendering for lead-search results.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module turns normalized leads into a framework-free view model. The
//! Leptos components in `components::lead_list` and `components::lead_card`
//! only walk the model, so everything a card shows is decided (and tested)
//! here.
//!
//! The output container always holds exactly one [`OutputView`]; each cycle
//! replaces it wholesale.

#[cfg(test)]
#[path = "lead_cards_test.rs"]
mod lead_cards_test;

use crate::net::api::TransportError;
use crate::net::interpret::Outcome;
use crate::state::options::PresentationOptions;
use crate::util::lead_fields::{NormalizedLead, QualityTier, normalize};

pub const NO_RESULTS_MESSAGE: &str = "Mi dispiace ma non ho trovato nulla";
pub const LOADING_TITLE: &str = "Ricerca in corso";
pub const LOADING_DETAIL: &str = "Stiamo analizzando gli annunci su Meta Ads Library";

/// The ads-library slot of a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdLinkField {
    Link(String),
    /// Rendered as plain text, never as an anchor.
    Unavailable,
}

/// Found/missing marker shown next to a contact when enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactStatus {
    Found,
    Missing,
}

impl ContactStatus {
    fn from_found(found: bool) -> Self {
        if found { Self::Found } else { Self::Missing }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Missing => "missing",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactField {
    pub value: String,
    pub found: bool,
    /// `None` when status indicators are turned off.
    pub status: Option<ContactStatus>,
}

impl ContactField {
    fn new(value: &str, found: bool, options: &PresentationOptions) -> Self {
        let status = options
            .show_status_indicators
            .then(|| ContactStatus::from_found(found));
        Self { value: value.to_owned(), found, status }
    }

    /// CSS class for the value; empty when the contact was found.
    #[must_use]
    pub fn value_class(&self) -> &'static str {
        if self.found { "" } else { "not-found" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualityBadge {
    pub label: String,
    pub tier: QualityTier,
}

impl QualityBadge {
    #[must_use]
    pub fn class(&self) -> String {
        match self.tier {
            QualityTier::None => "copy-badge".to_owned(),
            tier => format!("copy-badge {}", tier.as_str()),
        }
    }
}

/// One rendered lead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadCard {
    /// 1-based position in the response.
    pub ordinal: usize,
    pub title: String,
    pub ad_link: AdLinkField,
    pub landing_page: String,
    pub email: ContactField,
    pub phone: ContactField,
    pub quality: QualityBadge,
}

/// Rendering of a successful reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedList {
    NoResults,
    Cards(Vec<LeadCard>),
}

/// Full contents of the output container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputView {
    /// Before the first search.
    #[default]
    Blank,
    Loading,
    Leads(RenderedList),
    /// Engine-reported error, shown verbatim.
    ServiceError(String),
    /// Failure at or below the call boundary.
    Failure(String),
}

impl OutputView {
    /// Build the view for a settled cycle.
    #[must_use]
    pub fn settled(result: Result<Outcome, TransportError>, options: &PresentationOptions) -> Self {
        match result {
            Ok(Outcome::ServiceError { message }) => Self::ServiceError(message),
            Ok(Outcome::Leads { leads }) => {
                let normalized: Vec<NormalizedLead> = leads
                    .iter()
                    .map(|raw| normalize(raw, options.classification))
                    .collect();
                Self::Leads(render(&normalized, options))
            }
            Err(err) => Self::Failure(failure_message(&err)),
        }
    }

    /// Number of lead cards in the container.
    #[cfg(test)]
    pub(crate) fn card_count(&self) -> usize {
        match self {
            Self::Leads(RenderedList::Cards(cards)) => cards.len(),
            _ => 0,
        }
    }

    /// Number of standalone message elements.
    #[cfg(test)]
    pub(crate) fn message_count(&self) -> usize {
        match self {
            Self::Blank | Self::Leads(RenderedList::Cards(_)) => 0,
            Self::Loading | Self::Leads(RenderedList::NoResults) | Self::ServiceError(_) | Self::Failure(_) => 1,
        }
    }
}

/// Render normalized leads, one card per lead in response order.
#[must_use]
pub fn render(leads: &[NormalizedLead], options: &PresentationOptions) -> RenderedList {
    if leads.is_empty() {
        return RenderedList::NoResults;
    }
    let cards = leads
        .iter()
        .enumerate()
        .map(|(i, lead)| render_card(i + 1, lead, options))
        .collect();
    RenderedList::Cards(cards)
}

fn render_card(ordinal: usize, lead: &NormalizedLead, options: &PresentationOptions) -> LeadCard {
    LeadCard {
        ordinal,
        title: format!("Lead #{ordinal}"),
        ad_link: lead
            .ad_link
            .clone()
            .map_or(AdLinkField::Unavailable, AdLinkField::Link),
        landing_page: lead.landing_page.clone(),
        email: ContactField::new(&lead.email, lead.has_email, options),
        phone: ContactField::new(&lead.phone, lead.has_phone, options),
        quality: QualityBadge { label: lead.copy_label.clone(), tier: lead.quality_tier },
    }
}

/// Text of the failure element for a transport-class error.
#[must_use]
pub fn failure_message(err: &TransportError) -> String {
    format!("❌ Errore: {err}")
}
