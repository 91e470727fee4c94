//! Per-card preview playback state
//!
//! A card owns at most one audio handle, built the first time the user hits
//! play. The handle stays with the card until the card goes away.

use tracing::debug;

/// Minimal control surface of a preview audio element
pub trait PreviewAudio {
    fn play(&self);
    fn pause(&self);
}

/// Play/pause state for one card
#[derive(Debug)]
pub struct PreviewToggle<A> {
    audio: Option<A>,
    playing: bool,
}

impl<A> Default for PreviewToggle<A> {
    fn default() -> Self {
        Self {
            audio: None,
            playing: false,
        }
    }
}

impl<A: PreviewAudio> PreviewToggle<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Flip between playing and paused, creating the handle with `make` on
    /// first use. If `make` yields nothing (no preview URL, element could not
    /// be created) the card stays paused.
    pub fn toggle(&mut self, make: impl FnOnce() -> Option<A>) -> bool {
        if self.audio.is_none() {
            self.audio = make();
        }
        let Some(audio) = self.audio.as_ref() else {
            debug!("No preview audio available");
            return self.playing;
        };

        if self.playing {
            audio.pause();
        } else {
            audio.play();
        }
        self.playing = !self.playing;
        self.playing
    }

    /// Natural end of playback
    pub fn on_ended(&mut self) {
        self.playing = false;
    }

    /// Card teardown: pause and drop the handle.
    pub fn release(&mut self) {
        if let Some(audio) = self.audio.take() {
            audio.pause();
        }
        self.playing = false;
    }
}
