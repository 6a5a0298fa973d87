//! Card component for a single lead.

#[cfg(test)]
#[path = "lead_card_test.rs"]
mod lead_card_test;

use leptos::prelude::*;

use crate::util::lead_cards::{AdLinkField, ContactField, ContactStatus, LeadCard};
use crate::util::lead_fields::AD_LINK_UNAVAILABLE;

/// One lead rendered as a self-contained card.
#[component]
pub fn LeadCardView(card: LeadCard) -> impl IntoView {
    let LeadCard { ordinal, title, ad_link, landing_page, email, phone, quality } = card;
    let badge_class = quality.class();

    let ad_link_view = match ad_link {
        AdLinkField::Link(url) => {
            let href = url.clone();
            view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="ad-link">
                {url}
            </a>
            }
            .into_any()
        }
        AdLinkField::Unavailable => view! { <span class="not-found">{AD_LINK_UNAVAILABLE}</span> }.into_any(),
    };

    let landing_href = landing_page.clone();
    view! {
        <div class="lead-card" data-ordinal=ordinal.to_string()>
            <h3>{title}</h3>
            <div class="lead-info">
                <div class="lead-info-item">
                    <strong>"📢 Link Ads"</strong>
                    {ad_link_view}
                </div>
                <div class="lead-info-item">
                    <strong>"🌐 Landing page"</strong>
                    <a href=landing_href target="_blank" rel="noopener noreferrer">
                        {landing_page}
                    </a>
                </div>
                <ContactRow label="📧 Email" field=email/>
                <ContactRow label="📞 Telefono" field=phone/>
                <div class="lead-info-item">
                    <strong>"✍️ Valutazione copy"</strong>
                    <span class=badge_class>{quality.label}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactRow(label: &'static str, field: ContactField) -> impl IntoView {
    let value_class = field.value_class();
    let dot = field.status.map(|status| {
        view! { <span class=status_dot_class(status)></span> }
    });

    view! {
        <div class="lead-info-item">
            <strong>{dot}{label}</strong>
            <span class=value_class>{field.value}</span>
        </div>
    }
}

fn status_dot_class(status: ContactStatus) -> String {
    format!("status-dot status-dot--{}", status.as_str())
}
