//! PlaybackSideEffect: playback operations produced by dispatch.
//!
//! `dispatch_action` pushes effects into a `Vec<PlaybackSideEffect>` instead of
//! talking to the backend directly, keeping state mutation free of I/O.

use crate::playback::{PlaybackBackend, Tone};

/// A deferred playback operation produced during action dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackSideEffect {
    StopNote { note: usize },
    StartNote { note: usize, tones: Vec<Tone> },
}

/// Apply effects in order. Failures are logged and do not stop the rest.
pub fn apply_side_effects(effects: &[PlaybackSideEffect], backend: &dyn PlaybackBackend) {
    for effect in effects {
        apply_one(effect, backend);
    }
}

fn apply_one(effect: &PlaybackSideEffect, backend: &dyn PlaybackBackend) {
    let result = match effect {
        PlaybackSideEffect::StopNote { note } => backend.stop_note(*note),
        PlaybackSideEffect::StartNote { note, tones } => backend.start_note(*note, tones),
    };
    if let Err(e) = result {
        log::warn!(target: "playback", "{:?} failed: {}", effect, e);
    }
}
