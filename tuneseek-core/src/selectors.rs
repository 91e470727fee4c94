//! Memoized derivations over `SearchState`
//!
//! A `Selector` remembers the last snapshot (by pointer) and argument it saw
//! and hands back the cached output until either changes.

use crate::error::ErrorInfo;
use crate::model::Track;
use crate::store::SearchState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Cached<A, T> {
    input: Rc<SearchState>,
    arg: A,
    output: T,
}

/// Single-entry memo keyed by snapshot identity and argument
pub struct Selector<A, T> {
    compute: fn(&SearchState, &A) -> T,
    cache: RefCell<Option<Cached<A, T>>>,
    computations: Cell<usize>,
}

impl<A: Clone + PartialEq, T: Clone> Selector<A, T> {
    pub fn new(compute: fn(&SearchState, &A) -> T) -> Self {
        Self {
            compute,
            cache: RefCell::new(None),
            computations: Cell::new(0),
        }
    }

    pub fn select(&self, state: &Rc<SearchState>, arg: &A) -> T {
        if let Some(cached) = self.cache.borrow().as_ref() {
            if Rc::ptr_eq(&cached.input, state) && cached.arg == *arg {
                return cached.output.clone();
            }
        }

        let output = (self.compute)(state.as_ref(), arg);
        self.computations.set(self.computations.get() + 1);
        *self.cache.borrow_mut() = Some(Cached {
            input: Rc::clone(state),
            arg: arg.clone(),
            output: output.clone(),
        });
        output
    }

    /// How many times the output was actually recomputed
    pub fn computations(&self) -> usize {
        self.computations.get()
    }
}

/// The selector set views read the store through
pub struct SearchSelectors {
    tracks: Selector<(), Rc<Vec<Track>>>,
    loading: Selector<(), bool>,
    error: Selector<(), Option<ErrorInfo>>,
    query: Selector<(), String>,
    track_by_id: Selector<i64, Option<Track>>,
}

impl Default for SearchSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSelectors {
    pub fn new() -> Self {
        Self {
            tracks: Selector::new(|s: &SearchState, _: &()| Rc::clone(&s.tracks)),
            loading: Selector::new(|s: &SearchState, _: &()| s.loading),
            error: Selector::new(|s: &SearchState, _: &()| s.error.clone()),
            query: Selector::new(|s: &SearchState, _: &()| s.query.clone()),
            track_by_id: Selector::new(|s: &SearchState, id: &i64| {
                s.tracks.iter().find(|t| t.id == *id).cloned()
            }),
        }
    }

    pub fn tracks(&self, state: &Rc<SearchState>) -> Rc<Vec<Track>> {
        self.tracks.select(state, &())
    }

    pub fn loading(&self, state: &Rc<SearchState>) -> bool {
        self.loading.select(state, &())
    }

    pub fn error(&self, state: &Rc<SearchState>) -> Option<ErrorInfo> {
        self.error.select(state, &())
    }

    pub fn query(&self, state: &Rc<SearchState>) -> String {
        self.query.select(state, &())
    }

    pub fn track_by_id(&self, state: &Rc<SearchState>, id: i64) -> Option<Track> {
        self.track_by_id.select(state, &id)
    }

    /// Recompute count of the `track_by_id` selector
    pub fn track_lookups(&self) -> usize {
        self.track_by_id.computations()
    }
}
