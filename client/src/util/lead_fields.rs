//! Lead field normalization.
//!
//! The lead engine fills fields it could not find with fixed Italian
//! placeholders instead of leaving them out. [`normalize`] folds both the
//! placeholder and a genuinely missing value into one "absent" state and
//! derives the display values the cards need.

#[cfg(test)]
#[path = "lead_fields_test.rs"]
mod lead_fields_test;

use crate::net::types::RawLead;
use crate::state::options::ClassificationStrictness;

pub const EMAIL_NOT_FOUND: &str = "Non trovata";
pub const PHONE_NOT_FOUND: &str = "Non trovato";
pub const AD_LINK_UNAVAILABLE: &str = "Non disponibile";
pub const COPY_NOT_RATED: &str = "N/A";

const VERY_INTERESTING_LABEL: &str = "copy molto interessante";
const INTERESTING_LABEL: &str = "copy interessante";
const VERY_INTERESTING_PHRASE: &str = "molto interessante";
const INTERESTING_PHRASE: &str = "interessante";

/// Three-level classification of an ad's copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QualityTier {
    #[default]
    None,
    Interesting,
    VeryInteresting,
}

impl QualityTier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Interesting => "interesting",
            Self::VeryInteresting => "very-interesting",
        }
    }
}

/// Display-ready view of one [`RawLead`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedLead {
    /// `None` when the engine had no ads-library link.
    pub ad_link: Option<String>,
    pub landing_page: String,
    /// Email text to show; the placeholder when `has_email` is false.
    pub email: String,
    /// Phone text to show; the placeholder when `has_phone` is false.
    pub phone: String,
    /// Copy label to show; `"N/A"` when absent.
    pub copy_label: String,
    pub has_email: bool,
    pub has_phone: bool,
    pub quality_tier: QualityTier,
}

/// Derive the display view of a lead. Never fails.
#[must_use]
pub fn normalize(raw: &RawLead, strictness: ClassificationStrictness) -> NormalizedLead {
    let email = present(raw.email.as_deref(), EMAIL_NOT_FOUND);
    let phone = present(raw.telefono.as_deref(), PHONE_NOT_FOUND);
    let copy = present(raw.copy_valutazione.as_deref(), COPY_NOT_RATED);

    NormalizedLead {
        ad_link: present(raw.ad_link.as_deref(), AD_LINK_UNAVAILABLE).map(str::to_owned),
        landing_page: raw.landing_page.trim().to_owned(),
        email: email.unwrap_or(EMAIL_NOT_FOUND).to_owned(),
        phone: phone.unwrap_or(PHONE_NOT_FOUND).to_owned(),
        copy_label: copy.unwrap_or(COPY_NOT_RATED).to_owned(),
        has_email: email.is_some(),
        has_phone: phone.is_some(),
        quality_tier: classify_copy(copy, strictness),
    }
}

/// Classify a copy-quality label.
///
/// The stronger phrase is tried first because the weaker one is a suffix of
/// it and would otherwise match inside it.
#[must_use]
pub fn classify_copy(label: Option<&str>, strictness: ClassificationStrictness) -> QualityTier {
    let Some(label) = label else {
        return QualityTier::None;
    };
    let label = label.trim().to_lowercase();
    let (strong, weak) = match strictness {
        ClassificationStrictness::Exact => {
            (label == VERY_INTERESTING_LABEL, label == INTERESTING_LABEL)
        }
        ClassificationStrictness::Substring => {
            (label.contains(VERY_INTERESTING_PHRASE), label.contains(INTERESTING_PHRASE))
        }
    };
    if strong {
        QualityTier::VeryInteresting
    } else if weak {
        QualityTier::Interesting
    } else {
        QualityTier::None
    }
}

/// The value as sent, unless it is empty or exactly `sentinel`.
fn present<'a>(value: Option<&'a str>, sentinel: &str) -> Option<&'a str> {
    value.filter(|v| !v.is_empty() && *v != sentinel)
}
