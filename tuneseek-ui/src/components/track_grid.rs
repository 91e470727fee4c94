//! Result grid for the search page

use crate::components::helpers::LoadingSpinner;
use dioxus::prelude::*;
use std::rc::Rc;
use tuneseek_core::Track;

/// Card renderer handed in by the page, so the grid stays free of audio and
/// routing concerns.
///
/// PartialEq is always false: the closure may capture fresh state.
pub struct RenderFn<T>(pub Rc<dyn Fn(T, usize) -> Element>);

impl<T> Clone for RenderFn<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for RenderFn<T> {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

/// What the grid body shows for a given store state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridBody {
    /// Nothing searched yet
    Prompt,
    /// First load, nothing to show yet
    Spinner,
    /// Search finished without results
    Empty,
    /// Search failed before anything loaded; the page shows the error
    Nothing,
    /// Results, dimmed while a newer search loads
    Results { dimmed: bool },
}

impl GridBody {
    pub fn for_state(track_count: usize, loading: bool, has_error: bool, query: &str) -> Self {
        match (track_count, loading) {
            (0, true) => GridBody::Spinner,
            (0, false) if has_error => GridBody::Nothing,
            (0, false) if query.trim().is_empty() => GridBody::Prompt,
            (0, false) => GridBody::Empty,
            (_, dimmed) => GridBody::Results { dimmed },
        }
    }
}

#[component]
pub fn TrackGridView(
    tracks: Rc<Vec<Track>>,
    loading: bool,
    #[props(default)] has_error: bool,
    query: String,
    render_card: RenderFn<Track>,
) -> Element {
    match GridBody::for_state(tracks.len(), loading, has_error, &query) {
        GridBody::Nothing => rsx! {},
        GridBody::Prompt => rsx! {
            p { class: "text-center text-gray-500 py-12", "Type an artist, album or song to start." }
        },
        GridBody::Spinner => rsx! {
            LoadingSpinner { message: "Searching..." }
        },
        GridBody::Empty => rsx! {
            p {
                class: "text-center text-gray-400 py-12",
                "data-testid": "no-results",
                "No tracks found for \"{query}\""
            }
        },
        GridBody::Results { dimmed } => rsx! {
            div { class: "relative",
                div {
                    class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-4",
                    "data-testid": "track-grid",
                    for (idx, track) in tracks.iter().enumerate() {
                        div { key: "{track.id}", {(render_card.0)(track.clone(), idx)} }
                    }
                }
                if dimmed {
                    div { class: "absolute inset-0 bg-gray-900/60 flex items-start justify-center pt-24 rounded-lg",
                        LoadingSpinner { message: "Searching..." }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_body_for_state() {
        assert_eq!(GridBody::for_state(0, false, false, ""), GridBody::Prompt);
        assert_eq!(
            GridBody::for_state(0, true, false, "beatles"),
            GridBody::Spinner
        );
        assert_eq!(GridBody::for_state(0, false, false, "zzzz"), GridBody::Empty);
        assert_eq!(
            GridBody::for_state(3, true, false, "beatles"),
            GridBody::Results { dimmed: true }
        );
        assert_eq!(
            GridBody::for_state(3, false, false, "beatles"),
            GridBody::Results { dimmed: false }
        );
    }

    #[test]
    fn test_failed_first_search_is_not_reported_as_empty() {
        assert_eq!(
            GridBody::for_state(0, false, true, "Beatles"),
            GridBody::Nothing
        );
        assert_eq!(
            GridBody::for_state(3, false, true, "Beatles"),
            GridBody::Results { dimmed: false }
        );
        assert_eq!(
            GridBody::for_state(0, true, true, "Beatles"),
            GridBody::Spinner
        );
    }
}
