//! Track details page views

use crate::components::helpers::{BackButton, ErrorDisplay, LoadingSpinner};
use crate::components::icons::MusicIcon;
use dioxus::prelude::*;
use tuneseek_core::{DetailsView, Track};

/// Details page body for every resolution state. Each state offers the way
/// back to the search page.
#[component]
pub fn TrackDetailsPageView(
    view: DetailsView,
    artwork_size: u32,
    on_back: EventHandler<()>,
) -> Element {
    let body = match view {
        DetailsView::Ready(track) => rsx! {
            TrackDetailsView { track, artwork_size }
        },
        DetailsView::Loading | DetailsView::Lookup(_) => rsx! {
            LoadingSpinner { message: "Loading track..." }
        },
        DetailsView::Failed(error) => rsx! {
            ErrorDisplay { error }
        },
        DetailsView::NotFound => rsx! {
            div { class: "text-center py-12", "data-testid": "track-not-found",
                p { class: "text-gray-300 text-lg mb-2", "Track not found" }
                p { class: "text-gray-500 text-sm",
                    "It may no longer be in the catalog. Try searching for it instead."
                }
            }
        },
    };

    rsx! {
        BackButton { on_click: move |_| on_back.call(()) }
        {body}
    }
}

/// Full view of one track
#[component]
pub fn TrackDetailsView(track: Track, artwork_size: u32) -> Element {
    let artwork = track.artwork_url(artwork_size);
    let release = track.release_date_label();

    rsx! {
        div { class: "flex flex-col md:flex-row gap-8", "data-testid": "track-details",
            div { class: "w-full md:w-80 shrink-0 aspect-square bg-gray-800 rounded-lg overflow-hidden flex items-center justify-center",
                if track.artwork_url_small.is_empty() {
                    MusicIcon { class: "w-16 h-16 text-gray-500" }
                } else {
                    img {
                        src: "{artwork}",
                        alt: "Artwork for {track.name}",
                        class: "w-full h-full object-cover",
                    }
                }
            }
            div { class: "flex flex-col gap-2 min-w-0",
                h1 { class: "text-3xl font-bold text-white", "{track.name}" }
                p { class: "text-xl text-gray-300", "{track.artist_name}" }
                if let Some(album) = &track.collection_name {
                    p { class: "text-gray-400", "{album}" }
                }
                div { class: "flex flex-wrap gap-x-6 gap-y-1 text-sm text-gray-500 mt-2",
                    if !track.genre.is_empty() {
                        span { "Genre: {track.genre}" }
                    }
                    if let Some(release) = release {
                        span { "Released: {release}" }
                    }
                }
                if let Some(url) = &track.preview_url {
                    audio {
                        class: "mt-6 w-full max-w-md",
                        controls: true,
                        preload: "none",
                        src: "{url}",
                    }
                }
            }
        }
    }
}
