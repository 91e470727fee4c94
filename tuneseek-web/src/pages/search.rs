use crate::preview::SongCard;
use crate::{use_orchestrator, Route};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::rc::Rc;
use tuneseek_core::{SearchDispatch, SearchSelectors, Track};
use tuneseek_ui::stores::use_search_store;
use tuneseek_ui::{ErrorDisplay, PageContainer, RenderFn, SearchInputView, TrackGridView};

/// Search page.
///
/// Typing echoes locally right away; the orchestrator decides when the
/// catalog is hit. Searches run on the root scope so leaving the page never
/// strands the store in its loading state; leaving only drops pending input.
#[component]
pub fn Search() -> Element {
    let store = use_search_store();
    let orchestrator = use_orchestrator();
    let selectors = use_hook(|| Rc::new(SearchSelectors::new()));
    let mut input = use_signal(|| store.snapshot().query.clone());

    use_drop({
        let orchestrator = orchestrator.clone();
        move || orchestrator.cancel_pending()
    });

    let state = store.state();
    let tracks = selectors.tracks(&state);
    let loading = selectors.loading(&state);
    let error = selectors.error(&state);
    let has_error = error.is_some();
    let query = selectors.query(&state);

    let on_input = {
        let orchestrator = orchestrator.clone();
        move |value: String| {
            input.set(value.clone());
            // Pending right away, so a clear or unmount before the task runs
            // still cancels it.
            let ticket = orchestrator.schedule_input(value);
            let orchestrator = orchestrator.clone();
            spawn_forever(async move {
                orchestrator.fire_input(ticket).await;
            });
        }
    };

    let on_search = {
        let orchestrator = orchestrator.clone();
        move |value: String| {
            let orchestrator = orchestrator.clone();
            spawn_forever(async move {
                orchestrator.search_now(&value).await;
            });
        }
    };

    let on_clear = {
        let orchestrator = orchestrator.clone();
        move |_: ()| {
            input.set(String::new());
            orchestrator.clear();
        }
    };

    let render_card = RenderFn(Rc::new(move |track: Track, _idx: usize| {
        rsx! {
            SongCard {
                track,
                on_open: move |id: i64| {
                    navigator().push(Route::TrackDetails { id: id.to_string() });
                },
            }
        }
    }));

    rsx! {
        PageContainer {
            div { class: "max-w-2xl mx-auto mb-8",
                h1 { class: "text-3xl font-bold text-center mb-6", "iTunes Track Search" }
                SearchInputView {
                    value: input(),
                    loading,
                    on_input,
                    on_search,
                    on_clear,
                    autofocus: true,
                }
                if let Some(error) = error {
                    div { class: "mt-4", ErrorDisplay { error } }
                }
            }
            TrackGridView {
                tracks,
                loading,
                has_error,
                query,
                render_card,
            }
        }
    }
}
