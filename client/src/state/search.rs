//! Request lifecycle for lead searches.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RequestController` owns the only outstanding-request state in the app.
//! It validates, flips the submit control, shows the loading placeholder,
//! awaits the transport (the single suspension point of a cycle), and then
//! replaces the output container with the settled view.
//!
//! DESIGN
//! ======
//! The page's interface elements reach the controller through the
//! [`SearchSurface`] trait and the network through [`LeadTransport`], so the
//! whole cycle runs in native tests without a browser.
//!
//! A second submission while `Loading` is rejected, not queued. Every exit
//! path of a started cycle goes back through `Settled` and re-enables the
//! control.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::sync::{Mutex, PoisonError};

use crate::net::api::LeadTransport;
use crate::net::interpret::{Outcome, interpret_body};
use crate::state::options::SearchConfig;
use crate::state::query::{TrimmedQuery, ValidationError, validate};
use crate::util::lead_cards::OutputView;

/// Lifecycle of the single search slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Settled,
}

/// The interface elements a search cycle mutates.
pub trait SearchSurface {
    /// Enable or disable the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Replace the whole output container.
    fn replace_output(&self, view: OutputView);

    /// Interrupt the user with a blocking notice.
    fn notify(&self, message: &str);
}

/// How a settled cycle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    Leads(usize),
    NoResults,
    ServiceError,
    TransportFailure,
}

impl CycleOutcome {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leads(_) => "leads",
            Self::NoResults => "no_results",
            Self::ServiceError => "service_error",
            Self::TransportFailure => "transport_error",
        }
    }
}

/// Result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The query failed validation; nothing was sent.
    Rejected(ValidationError),
    /// A request was already in flight; nothing was sent.
    Busy,
    /// One request was sent and the cycle settled.
    Settled(CycleOutcome),
}

pub struct RequestController<S, T> {
    surface: S,
    transport: T,
    config: SearchConfig,
    state: Mutex<RequestState>,
}

impl<S: SearchSurface, T: LeadTransport> RequestController<S, T> {
    pub fn new(surface: S, transport: T, config: SearchConfig) -> Self {
        Self { surface, transport, config, state: Mutex::new(RequestState::Idle) }
    }

    pub fn state(&self) -> RequestState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_busy(&self) -> bool {
        self.state() == RequestState::Loading
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Validate user input and, if it passes, run one search cycle.
    ///
    /// Does nothing while a request is in flight, including no notice for
    /// blank input.
    pub async fn submit_input(&self, raw_query: &str) -> Submission {
        if self.is_busy() {
            leptos::logging::log!("lead search ignored: request already in flight");
            return Submission::Busy;
        }
        match validate(raw_query) {
            Ok(query) => self.submit(query).await,
            Err(err) => {
                self.surface.notify(&err.to_string());
                Submission::Rejected(err)
            }
        }
    }

    /// Run one search cycle for an already validated query.
    pub async fn submit(&self, query: TrimmedQuery) -> Submission {
        if !self.try_begin() {
            leptos::logging::log!("lead search ignored: request already in flight");
            return Submission::Busy;
        }
        leptos::logging::log!("lead search submitted: {} chars", query.as_str().len());

        self.surface.set_submit_enabled(false);
        self.surface.replace_output(OutputView::Loading);

        let result = self
            .transport
            .post_query(&self.config.endpoint, query.as_str())
            .await
            .and_then(interpret_body);

        let outcome = match &result {
            Ok(Outcome::Leads { leads }) if leads.is_empty() => CycleOutcome::NoResults,
            Ok(Outcome::Leads { leads }) => CycleOutcome::Leads(leads.len()),
            Ok(Outcome::ServiceError { .. }) => CycleOutcome::ServiceError,
            Err(err) => {
                leptos::logging::warn!("lead search failed: {err}");
                CycleOutcome::TransportFailure
            }
        };
        let view = OutputView::settled(result, &self.config.presentation);

        self.set_state(RequestState::Settled);
        self.surface.set_submit_enabled(true);
        self.surface.replace_output(view);
        match outcome {
            CycleOutcome::Leads(count) => leptos::logging::log!("lead search settled: {} ({count})", outcome.as_str()),
            _ => leptos::logging::log!("lead search settled: {}", outcome.as_str()),
        }
        Submission::Settled(outcome)
    }

    /// Move to `Loading` unless already there. Check and set happen under
    /// one lock.
    fn try_begin(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == RequestState::Loading {
            return false;
        }
        *state = RequestState::Loading;
        true
    }

    fn set_state(&self, next: RequestState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
