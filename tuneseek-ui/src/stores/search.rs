//! Search store handle backed by a Dioxus signal

use dioxus::prelude::*;
use std::rc::Rc;
use tuneseek_core::{reduce, SearchAction, SearchDispatch, SearchState, SearchStore};

/// Copyable handle to the app-wide search store.
///
/// Provided once by the app root; pages read it with `use_context`. Reading
/// through `state()` subscribes the calling component, while the orchestrator
/// writes through `SearchDispatch`.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchStoreHandle(Signal<SearchStore>);

impl SearchStoreHandle {
    pub fn new(signal: Signal<SearchStore>) -> Self {
        Self(signal)
    }

    /// Current snapshot, subscribing the caller to changes
    pub fn state(&self) -> Rc<SearchState> {
        self.0.read().state()
    }

    pub fn revision(&self) -> u64 {
        self.0.peek().revision()
    }
}

impl SearchDispatch for SearchStoreHandle {
    /// Writes (and wakes subscribers) only when the action changes the state.
    fn dispatch(&self, action: SearchAction) {
        let next = reduce(&self.0.peek().state(), action);
        if let Some(next) = next {
            let mut signal = self.0;
            signal.write().commit(next);
        }
    }

    fn snapshot(&self) -> Rc<SearchState> {
        self.0.peek().state()
    }
}

/// Create the store signal and provide its handle as context.
pub fn use_search_store_provider() -> SearchStoreHandle {
    let signal = use_signal(SearchStore::new);
    use_context_provider(|| SearchStoreHandle::new(signal))
}

pub fn use_search_store() -> SearchStoreHandle {
    use_context::<SearchStoreHandle>()
}
