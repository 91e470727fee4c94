//! Song card - pure view with callbacks

use crate::components::icons::{EllipsisIcon, MusicIcon, PauseIcon, PlayIcon, XIcon};
use dioxus::prelude::*;
use tuneseek_core::Track;

/// One search result.
///
/// Clicking the card opens the track's page through `on_open`. The play and
/// details buttons stop propagation so they never count as a card click.
/// Playback itself lives with the caller; this view only mirrors `is_playing`.
#[component]
pub fn SongCardView(
    track: Track,
    is_playing: bool,
    on_toggle_preview: EventHandler<()>,
    on_open: EventHandler<i64>,
) -> Element {
    let mut details_open = use_signal(|| false);

    let track_id = track.id;
    let has_preview = track.preview_url.is_some();
    let play_label = if is_playing { "Pause preview" } else { "Play preview" };

    rsx! {
        div {
            class: "bg-white/5 hover:bg-white/10 rounded-lg overflow-hidden shadow-lg transition-all duration-300 hover:-translate-y-1 cursor-pointer group relative flex flex-col h-full",
            "data-testid": "song-card",
            onclick: move |_| on_open.call(track_id),
            div { class: "aspect-square bg-gray-700 flex items-center justify-center",
                if track.artwork_url_small.is_empty() {
                    MusicIcon { class: "w-12 h-12 text-gray-500" }
                } else {
                    img {
                        src: "{track.artwork_url_small}",
                        alt: "Artwork for {track.name}",
                        class: "w-full h-full object-cover",
                    }
                }
            }
            div { class: "p-3 pb-12 flex flex-col gap-1 min-w-0",
                h3 {
                    class: "font-semibold text-white text-sm truncate",
                    title: "{track.name}",
                    "{track.name}"
                }
                p {
                    class: "text-gray-400 text-xs truncate",
                    title: "{track.artist_name}",
                    "{track.artist_name}"
                }
                if !track.genre.is_empty() {
                    p { class: "text-gray-500 text-xs truncate", "{track.genre}" }
                }
            }
            div { class: "absolute bottom-2 right-2 flex gap-2",
                button {
                    class: "w-8 h-8 rounded-full flex items-center justify-center text-white bg-gray-900/70 hover:bg-gray-800",
                    "data-testid": "song-details-button",
                    title: "More details",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        details_open.set(true);
                    },
                    EllipsisIcon { class: "w-4 h-4" }
                }
                button {
                    class: "w-8 h-8 rounded-full flex items-center justify-center text-black bg-emerald-500 hover:bg-emerald-400 disabled:opacity-40 disabled:cursor-not-allowed",
                    "data-testid": "preview-button",
                    title: "{play_label}",
                    disabled: !has_preview,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_toggle_preview.call(());
                    },
                    if is_playing {
                        PauseIcon { class: "w-4 h-4" }
                    } else {
                        PlayIcon { class: "w-4 h-4" }
                    }
                }
            }
            if details_open() {
                SongDetailsDialog {
                    track: track.clone(),
                    on_close: move |_| details_open.set(false),
                    on_open_page: move |_| {
                        details_open.set(false);
                        on_open.call(track_id);
                    },
                }
            }
        }
    }
}

/// Quick look at a track without leaving the results
#[component]
fn SongDetailsDialog(
    track: Track,
    on_close: EventHandler<()>,
    on_open_page: EventHandler<()>,
) -> Element {
    let release = track.release_date_label();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-[3000] cursor-default",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
            div {
                class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4 text-left",
                "data-testid": "song-details-dialog",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "flex items-start justify-between gap-4 mb-4",
                    h2 { class: "text-xl font-bold text-white", "{track.name}" }
                    button {
                        class: "text-gray-400 hover:text-white",
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }
                dl { class: "grid grid-cols-[auto_1fr] gap-x-4 gap-y-2 text-sm mb-6",
                    dt { class: "text-gray-500", "Artist" }
                    dd { class: "text-gray-200", "{track.artist_name}" }
                    if let Some(album) = &track.collection_name {
                        dt { class: "text-gray-500", "Album" }
                        dd { class: "text-gray-200", "{album}" }
                    }
                    dt { class: "text-gray-500", "Genre" }
                    dd { class: "text-gray-200", "{track.genre}" }
                    if let Some(release) = release {
                        dt { class: "text-gray-500", "Released" }
                        dd { class: "text-gray-200", "{release}" }
                    }
                }
                div { class: "flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                    button {
                        class: "px-4 py-2 bg-emerald-600 hover:bg-emerald-500 text-white rounded-lg",
                        onclick: move |_| on_open_page.call(()),
                        "Open track page"
                    }
                }
            }
        }
    }
}
