use crate::{use_orchestrator, Route};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::info;
use tuneseek_core::{
    parse_route_id, resolve_details, CatalogConfig, DetailsLookup, DetailsView, SearchSelectors,
};
use tuneseek_ui::stores::use_search_store;
use tuneseek_ui::{PageContainer, TrackDetailsPageView};

/// Track details page.
///
/// Uses the store when the track is already there (the usual path from the
/// search grid). A direct link with an empty store runs one lookup for the id.
#[component]
pub fn TrackDetails(id: ReadSignal<String>) -> Element {
    let store = use_search_store();
    let orchestrator = use_orchestrator();
    let config = use_context::<CatalogConfig>();
    let selectors = use_hook(|| Rc::new(SearchSelectors::new()));

    let mut lookup = use_signal(DetailsLookup::new);

    let view = use_memo(move || {
        let id = id();
        let state = store.state();
        let attempted = lookup.read().attempted(&id, store.revision());
        let track = parse_route_id(&id).and_then(|n| selectors.track_by_id(&state, n));
        resolve_details(
            &id,
            track,
            selectors.loading(&state),
            selectors.error(&state),
            attempted,
        )
    });

    use_effect(move || {
        let DetailsView::Lookup(term) = view() else {
            return;
        };
        let id = id.peek().clone();
        if !lookup.peek().should_lookup(&id) {
            return;
        }
        info!("Track {} not loaded, looking it up", id);
        lookup.write().start(&id, store.revision());
        let orchestrator = orchestrator.clone();
        spawn_forever(async move {
            orchestrator.lookup_track(&term).await;
        });
    });

    rsx! {
        PageContainer { narrow: true,
            TrackDetailsPageView {
                view: view(),
                artwork_size: config.artwork_size,
                on_back: move |_| {
                    navigator().push(Route::Search {});
                },
            }
        }
    }
}
