//! End-to-end flows through the core: search, preview cards, direct details.
mod support;

use std::cell::RefCell;
use std::rc::Rc;
use support::{ms, orchestrator, tracing_init, SharedStore, TestOrchestrator};
use tokio::time::sleep;
use tuneseek_core::{
    parse_route_id, resolve_details, DetailsLookup, DetailsView, PreviewAudio, PreviewToggle,
    SearchSelectors,
};

/// Audio handle that records play/pause calls under its own preview URL
struct RecordingAudio {
    url: String,
    log: Rc<RefCell<Vec<(String, &'static str)>>>,
}

impl PreviewAudio for RecordingAudio {
    fn play(&self) {
        self.log.borrow_mut().push((self.url.clone(), "play"));
    }
    fn pause(&self) {
        self.log.borrow_mut().push((self.url.clone(), "pause"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_search_then_preview_one_card() {
    tracing_init();
    let (catalog, store, orch) = orchestrator();
    catalog.respond_with_tracks(
        ms(20),
        &[(1, "Come Together"), (2, "Something"), (3, "Here Comes the Sun")],
    );

    orch.input_changed("Beatles").await;

    let selectors = SearchSelectors::new();
    let state = store.borrow().state();
    let tracks = selectors.tracks(&state);
    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Come Together", "Something", "Here Comes the Sun"]);
    assert!(!selectors.loading(&state));

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut cards: Vec<PreviewToggle<RecordingAudio>> =
        tracks.iter().map(|_| PreviewToggle::new()).collect();

    let second = &tracks[1];
    let playing = cards[1].toggle(|| {
        second.preview_url.clone().map(|url| RecordingAudio {
            url,
            log: Rc::clone(&log),
        })
    });

    assert!(playing);
    assert_eq!(
        *log.borrow(),
        vec![("https://audio.example/2.m4a".to_string(), "play")]
    );
    assert!(!cards[0].is_playing() && !cards[0].has_audio());
    assert!(!cards[2].is_playing() && !cards[2].has_audio());
}

/// The details page's resolve-then-maybe-lookup cycle over a shared store
struct DetailsPage {
    selectors: SearchSelectors,
    lookup: DetailsLookup,
}

impl DetailsPage {
    fn new() -> Self {
        Self {
            selectors: SearchSelectors::new(),
            lookup: DetailsLookup::new(),
        }
    }

    fn resolve(&self, store: &SharedStore, route_id: &str) -> DetailsView {
        let state = store.borrow().state();
        let revision = store.borrow().revision();
        let track = parse_route_id(route_id).and_then(|n| self.selectors.track_by_id(&state, n));
        resolve_details(
            route_id,
            track,
            self.selectors.loading(&state),
            self.selectors.error(&state),
            self.lookup.attempted(route_id, revision),
        )
    }

    /// Resolve, start the lookup if one is due, and resolve again.
    async fn visit(
        &mut self,
        store: &SharedStore,
        orch: &TestOrchestrator,
        route_id: &str,
    ) -> DetailsView {
        if let DetailsView::Lookup(term) = self.resolve(store, route_id) {
            if self.lookup.should_lookup(route_id) {
                let revision = store.borrow().revision();
                self.lookup.start(route_id, revision);
                orch.lookup_track(&term).await;
            }
        }
        self.resolve(store, route_id)
    }
}

#[tokio::test(start_paused = true)]
async fn test_direct_details_link_looks_up_once() {
    let (catalog, store, orch) = orchestrator();
    catalog.respond_with_tracks(ms(50), &[(12345, "Something")]);
    let mut page = DetailsPage::new();

    assert_eq!(
        page.resolve(&store, "12345"),
        DetailsView::Lookup("12345".to_string())
    );

    match page.visit(&store, &orch, "12345").await {
        DetailsView::Ready(track) => {
            assert_eq!(track.id, 12345);
            assert_eq!(track.name, "Something");
        }
        other => panic!("expected Ready, got {other:?}"),
    }
    assert_eq!(catalog.terms(), vec!["12345"]);

    page.visit(&store, &orch, "12345").await;
    assert_eq!(catalog.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_details_lookup_in_flight_is_not_repeated() {
    let (catalog, store, orch) = orchestrator();
    catalog.respond_with_tracks(ms(100), &[(12345, "Something")]);
    let mut lookup = DetailsLookup::new();

    let revision = store.borrow().revision();
    lookup.start("12345", revision);
    tokio::join!(orch.lookup_track("12345"), async {
        sleep(ms(10)).await;
        let revision = store.borrow().revision();
        assert!(lookup.attempted("12345", revision));
        assert!(!lookup.should_lookup("12345"));
        assert!(store.borrow().state().loading);
    });

    assert_eq!(catalog.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_details_not_found_is_not_looked_up_again() {
    let (catalog, store, orch) = orchestrator();
    catalog.respond_with_tracks(ms(0), &[]);
    let mut page = DetailsPage::new();

    assert_eq!(page.visit(&store, &orch, "12345").await, DetailsView::NotFound);
    assert_eq!(page.visit(&store, &orch, "12345").await, DetailsView::NotFound);
    assert_eq!(catalog.terms(), vec!["12345"]);
}

#[tokio::test(start_paused = true)]
async fn test_details_new_route_id_gets_its_own_lookup() {
    let (catalog, store, orch) = orchestrator();
    catalog.respond_with_tracks(ms(0), &[]);
    catalog.respond_with_tracks(ms(0), &[(678, "Here Comes the Sun")]);
    let mut page = DetailsPage::new();

    assert_eq!(page.visit(&store, &orch, "12345").await, DetailsView::NotFound);
    match page.visit(&store, &orch, "678").await {
        DetailsView::Ready(track) => assert_eq!(track.name, "Here Comes the Sun"),
        other => panic!("expected Ready, got {other:?}"),
    }
    assert_eq!(catalog.terms(), vec!["12345", "678"]);
}

#[tokio::test(start_paused = true)]
async fn test_details_non_numeric_id_skips_lookup() {
    let (catalog, store, orch) = orchestrator();
    let mut page = DetailsPage::new();

    assert_eq!(page.visit(&store, &orch, "abc").await, DetailsView::NotFound);
    assert!(catalog.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_details_lookup_miss_is_not_found() {
    let (catalog, store, orch) = orchestrator();
    catalog.respond_with_tracks(ms(0), &[]);

    orch.lookup_track("999").await;

    let state = store.borrow().state();
    let selectors = SearchSelectors::new();
    assert_eq!(
        resolve_details(
            "999",
            selectors.track_by_id(&state, 999),
            selectors.loading(&state),
            selectors.error(&state),
            true,
        ),
        DetailsView::NotFound
    );
}
