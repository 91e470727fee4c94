//! What the track details page should show for a route id

use crate::error::ErrorInfo;
use crate::model::Track;

#[derive(Clone, Debug, PartialEq)]
pub enum DetailsView {
    /// Track is in the store
    Ready(Track),
    /// A search is in flight
    Loading,
    /// Not in the store and never looked up: search for this term
    Lookup(String),
    Failed(ErrorInfo),
    NotFound,
}

/// Decide the details page state.
///
/// `track` is the store's match for `route_id`, if any. Non-numeric ids can
/// never name a catalog track, so they go straight to `NotFound`.
pub fn resolve_details(
    route_id: &str,
    track: Option<Track>,
    loading: bool,
    error: Option<ErrorInfo>,
    lookup_attempted: bool,
) -> DetailsView {
    if let Some(track) = track {
        return DetailsView::Ready(track);
    }
    if loading {
        return DetailsView::Loading;
    }
    let id = route_id.trim();
    if !lookup_attempted && id.parse::<i64>().is_ok() {
        return DetailsView::Lookup(id.to_string());
    }
    match error {
        Some(error) => DetailsView::Failed(error),
        None => DetailsView::NotFound,
    }
}

/// Tracks the one lookup a details page may run for its route id.
///
/// A lookup counts as attempted only once the store has moved past the
/// revision recorded when it started, i.e. its request reached the store.
/// Until then the page keeps showing `Lookup` without starting another one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsLookup {
    started: Option<(String, u64)>,
}

impl DetailsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a lookup for `route_id` still has to be started.
    pub fn should_lookup(&self, route_id: &str) -> bool {
        !matches!(&self.started, Some((id, _)) if id == route_id.trim())
    }

    /// Record that a lookup for `route_id` starts at store `revision`.
    pub fn start(&mut self, route_id: &str, revision: u64) {
        self.started = Some((route_id.trim().to_string(), revision));
    }

    /// Whether the lookup for `route_id` has reached the store.
    pub fn attempted(&self, route_id: &str, revision: u64) -> bool {
        matches!(
            &self.started,
            Some((id, started_at)) if id == route_id.trim() && revision > *started_at
        )
    }
}

/// Numeric form of a route id
pub fn parse_route_id(route_id: &str) -> Option<i64> {
    route_id.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_track;

    fn error() -> ErrorInfo {
        ErrorInfo {
            message: "Network error: unable to reach the catalog".to_string(),
            status: None,
        }
    }

    #[test]
    fn test_track_in_store_is_ready() {
        let track = sample_track(12345, "Something");
        assert_eq!(
            resolve_details("12345", Some(track.clone()), true, Some(error()), false),
            DetailsView::Ready(track)
        );
    }

    #[test]
    fn test_empty_store_asks_for_lookup_once() {
        assert_eq!(
            resolve_details("12345", None, false, None, false),
            DetailsView::Lookup("12345".to_string())
        );
        assert_eq!(
            resolve_details("12345", None, false, None, true),
            DetailsView::NotFound
        );
    }

    #[test]
    fn test_loading_wins_over_lookup() {
        assert_eq!(
            resolve_details("12345", None, true, None, false),
            DetailsView::Loading
        );
    }

    #[test]
    fn test_failed_lookup_shows_error() {
        assert_eq!(
            resolve_details("12345", None, false, Some(error()), true),
            DetailsView::Failed(error())
        );
    }

    #[test]
    fn test_non_numeric_id_is_not_found() {
        assert_eq!(
            resolve_details("not-a-track", None, false, None, false),
            DetailsView::NotFound
        );
        assert_eq!(parse_route_id("not-a-track"), None);
        assert_eq!(parse_route_id(" 42 "), Some(42));
    }

    #[test]
    fn test_lookup_counts_once_the_store_moved() {
        let mut lookup = DetailsLookup::new();
        assert!(lookup.should_lookup("12345"));
        assert!(!lookup.attempted("12345", 4));

        lookup.start("12345", 4);
        assert!(!lookup.should_lookup("12345"));
        assert!(!lookup.attempted("12345", 4));
        assert!(lookup.attempted("12345", 5));
    }

    #[test]
    fn test_lookup_is_per_route_id() {
        let mut lookup = DetailsLookup::new();
        lookup.start("12345", 0);
        assert!(lookup.should_lookup("678"));
        assert!(!lookup.attempted("678", 3));

        lookup.start("678", 3);
        assert!(lookup.should_lookup("12345"));
        assert!(!lookup.attempted("12345", 9));
    }
}
