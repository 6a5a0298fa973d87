//! Lead search page: one query input, one submit control, one output
//! container.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the signals behind the three interface elements and hands
//! them to a [`RequestController`] through [`PageSurface`]. The controller
//! decides everything else; the page only forwards clicks and the confirm
//! key.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::lead_list::LeadList;
use crate::net::api::HttpTransport;
use crate::state::options::SearchConfig;
use crate::state::search::{RequestController, SearchSurface};
use crate::util::lead_cards::OutputView;

/// Signals backing the submit control and the output container.
#[derive(Clone, Copy)]
pub struct PageSurface {
    pub submit_enabled: RwSignal<bool>,
    pub output: RwSignal<OutputView>,
}

impl SearchSurface for PageSurface {
    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn replace_output(&self, view: OutputView) {
        self.output.set(view);
    }

    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::warn!("{message}");
        }
    }
}

/// Whether a key press in the query input should trigger a search.
fn confirms_search(key: &str, submit_enabled: bool) -> bool {
    key == "Enter" && submit_enabled
}

/// Search page: query input, search button and lead cards.
#[component]
pub fn SearchPage() -> impl IntoView {
    let config = use_context::<SearchConfig>().unwrap_or_default();
    let query = RwSignal::new(String::new());
    let submit_enabled = RwSignal::new(true);
    let output = RwSignal::new(OutputView::default());

    let surface = PageSurface { submit_enabled, output };
    let transport = HttpTransport::new(config.timeout_ms);
    let controller = Arc::new(RequestController::new(surface, transport, config));

    let search = Callback::new(move |()| {
        let raw = query.get_untracked();
        let controller = Arc::clone(&controller);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let _ = controller.submit_input(&raw).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (raw, controller);
    });

    view! {
        <div class="search-page">
            <header class="search-page__header">
                <h1>"Lead Finder"</h1>
                <p class="search-page__subtitle">"Trova inserzionisti attivi su Meta Ads Library"</p>
            </header>
            <div class="search-bar">
                <input
                    id="query"
                    class="search-bar__input"
                    type="text"
                    placeholder="es. corsi di inglese online"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if confirms_search(&ev.key(), submit_enabled.get_untracked()) {
                            ev.prevent_default();
                            search.run(());
                        }
                    }
                />
                <button
                    id="search"
                    class="search-bar__button"
                    class:loading=move || !submit_enabled.get()
                    disabled=move || !submit_enabled.get()
                    on:click=move |_| search.run(())
                >
                    "Cerca"
                </button>
            </div>
            <LeadList output=output/>
        </div>
    }
}
