use super::*;

// =============================================================
// Helpers
// =============================================================

fn raw(email: Option<&str>, telefono: Option<&str>, copy: Option<&str>) -> RawLead {
    RawLead {
        ad_link: Some("https://www.facebook.com/ads/library/?id=42".to_owned()),
        landing_page: "https://x.test".to_owned(),
        email: email.map(str::to_owned),
        telefono: telefono.map(str::to_owned),
        copy_valutazione: copy.map(str::to_owned),
    }
}

/// Feed the display values of a normalized lead back through the wire shape.
fn as_raw(lead: &NormalizedLead) -> RawLead {
    RawLead {
        ad_link: Some(lead.ad_link.clone().unwrap_or_else(|| AD_LINK_UNAVAILABLE.to_owned())),
        landing_page: lead.landing_page.clone(),
        email: Some(lead.email.clone()),
        telefono: Some(lead.phone.clone()),
        copy_valutazione: Some(lead.copy_label.clone()),
    }
}

const SUBSTRING: ClassificationStrictness = ClassificationStrictness::Substring;
const EXACT: ClassificationStrictness = ClassificationStrictness::Exact;

// =============================================================
// Contact presence
// =============================================================

#[test]
fn email_sentinel_means_not_found() {
    let lead = normalize(&raw(Some("Non trovata"), None, None), SUBSTRING);
    assert!(!lead.has_email);
    assert_eq!(lead.email, EMAIL_NOT_FOUND);
}

#[test]
fn any_other_email_is_found() {
    for email in ["info@shop.test", "x", "Non trovato"] {
        let lead = normalize(&raw(Some(email), None, None), SUBSTRING);
        assert!(lead.has_email, "{email} should count as found");
        assert_eq!(lead.email, email);
    }
}

#[test]
fn missing_or_empty_email_is_not_found() {
    assert!(!normalize(&raw(None, None, None), SUBSTRING).has_email);
    assert!(!normalize(&raw(Some(""), None, None), SUBSTRING).has_email);
}

#[test]
fn whitespace_and_padded_placeholders_count_as_present() {
    for email in ["  ", "Non trovata ", " Non trovata"] {
        let lead = normalize(&raw(Some(email), None, None), SUBSTRING);
        assert!(lead.has_email, "{email:?} should count as found");
        assert_eq!(lead.email, email);
    }
    let lead = normalize(&raw(None, Some("Non trovato "), None), SUBSTRING);
    assert!(lead.has_phone);

    let mut padded = raw(None, None, Some(" "));
    padded.ad_link = Some("Non disponibile ".to_owned());
    let lead = normalize(&padded, SUBSTRING);
    assert_eq!(lead.ad_link.as_deref(), Some("Non disponibile "));
    assert_eq!(lead.copy_label, " ");
    assert_eq!(lead.quality_tier, QualityTier::None);
}

#[test]
fn phone_uses_its_own_sentinel() {
    let missing = normalize(&raw(None, Some("Non trovato"), None), SUBSTRING);
    assert!(!missing.has_phone);
    assert_eq!(missing.phone, PHONE_NOT_FOUND);

    let found = normalize(&raw(None, Some("+391234"), None), SUBSTRING);
    assert!(found.has_phone);
    assert_eq!(found.phone, "+391234");
}

#[test]
fn ad_link_placeholder_becomes_none() {
    let mut lead = raw(None, None, None);
    lead.ad_link = Some("Non disponibile".to_owned());
    assert_eq!(normalize(&lead, SUBSTRING).ad_link, None);

    lead.ad_link = None;
    assert_eq!(normalize(&lead, SUBSTRING).ad_link, None);
}

#[test]
fn ad_link_is_kept_when_present() {
    let lead = normalize(&raw(None, None, None), SUBSTRING);
    assert_eq!(lead.ad_link.as_deref(), Some("https://www.facebook.com/ads/library/?id=42"));
}

// =============================================================
// Copy classification
// =============================================================

#[test]
fn exact_labels_classify_under_both_strategies() {
    for strictness in [SUBSTRING, EXACT] {
        assert_eq!(classify_copy(Some("Copy molto interessante"), strictness), QualityTier::VeryInteresting);
        assert_eq!(classify_copy(Some("Copy interessante"), strictness), QualityTier::Interesting);
        assert_eq!(classify_copy(Some("qualcos'altro"), strictness), QualityTier::None);
    }
}

#[test]
fn substring_matching_prefers_the_stronger_phrase() {
    let tier = classify_copy(Some("Valutazione: molto interessante (CTA chiara)"), SUBSTRING);
    assert_eq!(tier, QualityTier::VeryInteresting);
    let tier = classify_copy(Some("abbastanza interessante"), SUBSTRING);
    assert_eq!(tier, QualityTier::Interesting);
}

#[test]
fn exact_matching_ignores_embedded_phrases() {
    assert_eq!(classify_copy(Some("Valutazione: molto interessante"), EXACT), QualityTier::None);
    assert_eq!(classify_copy(Some("  copy MOLTO interessante "), EXACT), QualityTier::VeryInteresting);
}

#[test]
fn absent_copy_displays_na_with_no_tier() {
    let lead = normalize(&raw(None, None, None), SUBSTRING);
    assert_eq!(lead.copy_label, COPY_NOT_RATED);
    assert_eq!(lead.quality_tier, QualityTier::None);
}

#[test]
fn tier_css_names() {
    assert_eq!(QualityTier::None.as_str(), "none");
    assert_eq!(QualityTier::Interesting.as_str(), "interesting");
    assert_eq!(QualityTier::VeryInteresting.as_str(), "very-interesting");
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn normalizing_display_values_again_is_stable() {
    let inputs = [
        raw(Some("Non trovata"), Some("+391234"), Some("Copy molto interessante")),
        raw(Some("a@b.test"), None, None),
        raw(None, Some("Non trovato"), Some("Copy interessante")),
        raw(Some(" "), Some("Non trovato "), Some("")),
    ];
    for input in &inputs {
        for strictness in [SUBSTRING, EXACT] {
            let once = normalize(input, strictness);
            let twice = normalize(&as_raw(&once), strictness);
            assert_eq!(once, twice);
        }
    }
}
