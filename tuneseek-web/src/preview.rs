//! Song previews backed by an HTML `<audio>` element

use crate::wasm_utils::EventListenerGuard;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use tuneseek_core::{PreviewAudio, PreviewToggle, Track};
use tuneseek_ui::SongCardView;

/// One card's audio element. Dropping it pauses nothing by itself; callers
/// go through `PreviewToggle::release`, which pauses first.
pub struct WebPreviewAudio {
    element: web_sys::HtmlAudioElement,
    _ended: EventListenerGuard,
}

impl WebPreviewAudio {
    /// Build an element for `url`, calling `on_ended` when playback finishes.
    pub fn new(url: &str, mut on_ended: impl FnMut() + 'static) -> Option<Self> {
        let element = match web_sys::HtmlAudioElement::new_with_src(url) {
            Ok(element) => element,
            Err(e) => {
                warn!("Could not create audio element for {}: {:?}", url, e);
                return None;
            }
        };
        let target: web_sys::EventTarget = element.clone().into();
        let ended = EventListenerGuard::new(target, "ended", move |_| on_ended());
        Some(Self {
            element,
            _ended: ended,
        })
    }
}

impl PreviewAudio for WebPreviewAudio {
    fn play(&self) {
        if let Err(e) = self.element.play() {
            warn!("Preview playback failed: {:?}", e);
        }
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            warn!("Preview pause failed: {:?}", e);
        }
    }
}

type SharedToggle = Rc<RefCell<PreviewToggle<WebPreviewAudio>>>;

/// Song card with its own preview player.
///
/// Each card owns its audio, so playing one card leaves the others alone.
/// The audio is released when the card unmounts.
#[component]
pub fn SongCard(track: Track, on_open: EventHandler<i64>) -> Element {
    let toggle: SharedToggle = use_hook(|| Rc::new(RefCell::new(PreviewToggle::new())));
    let mut is_playing = use_signal(|| false);

    use_drop({
        let toggle = toggle.clone();
        move || toggle.borrow_mut().release()
    });

    let preview_url = track.preview_url.clone();
    let on_toggle_preview = move |_: ()| {
        let weak = Rc::downgrade(&toggle);
        let url = preview_url.clone();
        let playing = toggle.borrow_mut().toggle(move || {
            let url = url?;
            WebPreviewAudio::new(&url, move || {
                debug!("Preview ended");
                if let Some(toggle) = weak.upgrade() {
                    toggle.borrow_mut().on_ended();
                }
                is_playing.set(false);
            })
        });
        is_playing.set(playing);
    };

    rsx! {
        SongCardView {
            track,
            is_playing: is_playing(),
            on_toggle_preview,
            on_open,
        }
    }
}
