//! Search store: state, closed action set and a pure reducer
//!
//! ```text
//! Idle -> Loading -> (Success | Failure) -> Loading | Idle (next search / clear)
//! ```
//!
//! Every request carries an id. Only the outcome of the active request may
//! land; anything else is a stale response and is dropped by the reducer.

use crate::error::ErrorInfo;
use crate::model::Track;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Search state shared by every view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Last submitted term
    pub query: String,
    /// Results in catalog order; replaced wholesale on success
    pub tracks: Rc<Vec<Track>>,
    pub loading: bool,
    pub error: Option<ErrorInfo>,
    /// Id of the only request whose outcome may still land
    pub active_request: Option<u64>,
}

/// Store transitions
#[derive(Clone, Debug, PartialEq)]
pub enum SearchAction {
    Requested { request_id: u64, query: String },
    Succeeded { request_id: u64, tracks: Vec<Track> },
    Failed { request_id: u64, error: ErrorInfo },
    Cleared,
}

/// Apply `action` to `state`. `None` means the action changed nothing.
///
/// Tracks survive `Requested` and `Failed`, so the last good results stay
/// on screen while a search is loading or after it failed.
pub fn reduce(state: &SearchState, action: SearchAction) -> Option<SearchState> {
    match action {
        SearchAction::Requested { request_id, query } => {
            if state.active_request.is_some_and(|active| request_id < active) {
                debug!("Ignoring out-of-order request {}", request_id);
                return None;
            }
            Some(SearchState {
                query,
                tracks: Rc::clone(&state.tracks),
                loading: true,
                error: None,
                active_request: Some(request_id),
            })
        }
        SearchAction::Succeeded { request_id, tracks } => {
            if state.active_request != Some(request_id) {
                debug!("Dropping stale results for request {}", request_id);
                return None;
            }
            Some(SearchState {
                query: state.query.clone(),
                tracks: Rc::new(tracks),
                loading: false,
                error: None,
                active_request: None,
            })
        }
        SearchAction::Failed { request_id, error } => {
            if state.active_request != Some(request_id) {
                debug!("Dropping stale failure for request {}", request_id);
                return None;
            }
            Some(SearchState {
                query: state.query.clone(),
                tracks: Rc::clone(&state.tracks),
                loading: false,
                error: Some(error),
                active_request: None,
            })
        }
        SearchAction::Cleared => {
            if *state == SearchState::default() {
                return None;
            }
            Some(SearchState::default())
        }
    }
}

/// Process-lifetime container around the current state snapshot.
///
/// Each effective transition swaps in a fresh `Rc`, so pointer identity of
/// the snapshot tells selectors whether anything changed.
#[derive(Debug, Default)]
pub struct SearchStore {
    state: Rc<SearchState>,
    revision: u64,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: SearchAction) -> bool {
        match reduce(&self.state, action) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => false,
        }
    }

    /// Install a state already produced by `reduce`.
    pub fn commit(&mut self, next: SearchState) {
        self.state = Rc::new(next);
        self.revision += 1;
    }

    /// Current snapshot
    pub fn state(&self) -> Rc<SearchState> {
        Rc::clone(&self.state)
    }

    /// Number of effective transitions so far
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Sink the orchestrator writes transitions into
pub trait SearchDispatch {
    fn dispatch(&self, action: SearchAction);
    fn snapshot(&self) -> Rc<SearchState>;
}

impl SearchDispatch for Rc<RefCell<SearchStore>> {
    fn dispatch(&self, action: SearchAction) {
        self.borrow_mut().dispatch(action);
    }

    fn snapshot(&self) -> Rc<SearchState> {
        self.borrow().state()
    }
}
