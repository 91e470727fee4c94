pub mod pages;
pub mod preview;
pub mod wasm_utils;

use dioxus::prelude::*;
use pages::{AppLayout, Home, NotFound, Search, TrackDetails};
use std::rc::Rc;
use tracing::warn;
use tuneseek_core::{CatalogConfig, ItunesCatalog, SearchOrchestrator};
use tuneseek_ui::stores::{use_search_store_provider, SearchStoreHandle};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Orchestrator wired to the live catalog and the app-wide store
pub type WebOrchestrator = SearchOrchestrator<ItunesCatalog, SearchStoreHandle>;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/itunes")]
    Search {},
    #[route("/tracks/:id")]
    TrackDetails { id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn load_config() -> CatalogConfig {
    CatalogConfig::from_env().unwrap_or_else(|e| {
        warn!("Ignoring invalid catalog config: {e}");
        CatalogConfig::default()
    })
}

/// Shared orchestrator from context
pub fn use_orchestrator() -> Rc<WebOrchestrator> {
    use_context::<Rc<WebOrchestrator>>()
}

#[component]
pub fn App() -> Element {
    let store = use_search_store_provider();
    let config = use_context_provider(load_config);
    use_context_provider(|| {
        let quiet_period = config.debounce();
        Rc::new(SearchOrchestrator::new(
            ItunesCatalog::new(config),
            store,
            quiet_period,
        ))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen bg-gray-900 text-white", Router::<Route> {} }
    }
}
