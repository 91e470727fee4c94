//! Search orchestration: debounced input, catalog calls and store transitions
//!
//! Single-threaded. State lives in `Cell`/`RefCell` and no borrow
//! is held across an await, so several orchestrator futures (keystrokes, a
//! "search now", a details lookup) can be in flight on one task set.

use crate::catalog::{parse_tracks, CatalogClient};
use crate::error::ErrorInfo;
use crate::store::{SearchAction, SearchDispatch};
use crate::timer;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Proof that a debounced input was scheduled; redeemable only if nothing
/// newer happened since.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Collapses bursts of input into the most recent value.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<(u64, String)>,
}

impl Debouncer {
    /// Replace any pending input with `text`.
    pub fn schedule(&mut self, text: String) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some((self.generation, text));
        DebounceTicket(self.generation)
    }

    /// Drop the pending input. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        self.pending.take().is_some()
    }

    /// The pending input, if `ticket` is still the latest one.
    pub fn take(&mut self, ticket: DebounceTicket) -> Option<String> {
        match &self.pending {
            Some((generation, _)) if *generation == ticket.0 => {
                self.pending.take().map(|(_, text)| text)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Bridges user search intent to store transitions via a catalog client.
pub struct SearchOrchestrator<C, D> {
    client: C,
    store: D,
    quiet_period: Duration,
    debouncer: RefCell<Debouncer>,
    last_request_id: Cell<u64>,
}

impl<C: CatalogClient, D: SearchDispatch> SearchOrchestrator<C, D> {
    pub fn new(client: C, store: D, quiet_period: Duration) -> Self {
        Self {
            client,
            store,
            quiet_period,
            debouncer: RefCell::new(Debouncer::default()),
            last_request_id: Cell::new(0),
        }
    }

    pub fn store(&self) -> &D {
        &self.store
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Typed input. The input is pending from this call on, so a later
    /// clear, search or newer input supersedes it even if the returned
    /// future has not been polled yet. The future resolves after the quiet
    /// period and searches (or clears, for blank text) unless superseded.
    pub fn input_changed(&self, text: impl Into<String>) -> impl Future<Output = ()> + '_ {
        let ticket = self.schedule_input(text);
        self.fire_input(ticket)
    }

    /// Make `text` the pending input, replacing any earlier one.
    pub fn schedule_input(&self, text: impl Into<String>) -> DebounceTicket {
        self.debouncer.borrow_mut().schedule(text.into())
    }

    /// Wait out the quiet period, then act on the input behind `ticket` if it
    /// is still the latest.
    pub async fn fire_input(&self, ticket: DebounceTicket) {
        timer::sleep(self.quiet_period).await;

        let due = self.debouncer.borrow_mut().take(ticket);
        match due {
            Some(text) if text.trim().is_empty() => self.store.dispatch(SearchAction::Cleared),
            Some(text) => self.run_search(text.trim()).await,
            None => debug!("Debounced input superseded"),
        }
    }

    /// Explicit search: skips the quiet period and cancels pending input so a
    /// stale debounced call cannot land after this one. Blank text is a no-op.
    pub async fn search_now(&self, text: &str) {
        self.cancel_pending();
        let term = text.trim();
        if term.is_empty() {
            return;
        }
        self.run_search(term).await;
    }

    /// Cancel pending input and reset the store.
    pub fn clear(&self) {
        self.cancel_pending();
        self.store.dispatch(SearchAction::Cleared);
    }

    /// Teardown hook: forget pending input without touching the store.
    pub fn cancel_pending(&self) {
        if self.debouncer.borrow_mut().cancel() {
            debug!("Cancelled pending debounced search");
        }
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.borrow().is_pending()
    }

    /// Make sure the track named by `route_id` is in the store.
    ///
    /// Relies on the catalog's term search matching track ids, so a miss is
    /// looked up by searching for the id itself. Returns whether a lookup ran.
    pub async fn lookup_track(&self, route_id: &str) -> bool {
        let present = self
            .store
            .snapshot()
            .tracks
            .iter()
            .any(|t| t.matches_id(route_id));
        if present {
            return false;
        }
        info!("Track {} not in results, looking it up", route_id.trim());
        self.run_search(route_id.trim()).await;
        true
    }

    async fn run_search(&self, term: &str) {
        let request_id = self.last_request_id.get() + 1;
        self.last_request_id.set(request_id);

        info!("Search #{} for {:?}", request_id, term);
        self.store.dispatch(SearchAction::Requested {
            request_id,
            query: term.to_string(),
        });

        let response = self.client.search(term).await;

        let action = match response.error() {
            None => {
                let tracks = parse_tracks(&response.data);
                info!("Search #{} returned {} track(s)", request_id, tracks.len());
                SearchAction::Succeeded { request_id, tracks }
            }
            Some(err) => {
                warn!("Search #{} failed: {}", request_id, err);
                SearchAction::Failed {
                    request_id,
                    error: ErrorInfo::from(err),
                }
            }
        };
        self.store.dispatch(action);
    }
}
