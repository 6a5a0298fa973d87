//! Output container for lead-search results.
//!
//! Renders whatever [`OutputView`] the controller last stored. Each new view
//! replaces the previous contents entirely.

#[cfg(test)]
#[path = "lead_list_test.rs"]
mod lead_list_test;

use leptos::prelude::*;

use crate::components::lead_card::LeadCardView;
use crate::util::lead_cards::{LOADING_DETAIL, LOADING_TITLE, NO_RESULTS_MESSAGE, OutputView, RenderedList};

#[component]
pub fn LeadList(output: RwSignal<OutputView>) -> impl IntoView {
    view! {
        <div id="leads_container" class="leads-container">
            {move || render_output(output.get())}
        </div>
    }
}

fn render_output(current: OutputView) -> AnyView {
    if let Some((class, text)) = message_element(&current) {
        return view! { <div class=class>{text}</div> }.into_any();
    }
    match current {
        OutputView::Loading => view! {
            <div class="loading-state">
                <div class="big-loader"></div>
                <h3>{LOADING_TITLE}<span class="loading-dots"></span></h3>
                <p>{LOADING_DETAIL}</p>
            </div>
        }
        .into_any(),
        OutputView::Leads(RenderedList::Cards(cards)) => cards
            .into_iter()
            .map(|card| view! { <LeadCardView card=card/> })
            .collect::<Vec<_>>()
            .into_any(),
        _ => ().into_any(),
    }
}

/// Class and text of the single message element a view shows, if any.
fn message_element(current: &OutputView) -> Option<(&'static str, String)> {
    match current {
        OutputView::Leads(RenderedList::NoResults) => Some(("empty-state", NO_RESULTS_MESSAGE.to_owned())),
        OutputView::ServiceError(message) => Some(("empty-state", message.clone())),
        OutputView::Failure(message) => Some(("error-state", message.clone())),
        OutputView::Blank | OutputView::Loading | OutputView::Leads(RenderedList::Cards(_)) => None,
    }
}
