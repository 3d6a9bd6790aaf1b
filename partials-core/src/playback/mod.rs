//! Playback: the backend seam and per-note voice bookkeeping.

pub mod backend;
mod voices;

pub use backend::{
    BackendError, BackendResult, NullBackend, PlaybackBackend, PlaybackOp, TestBackend,
};
pub use voices::VoiceTracker;

use serde::{Deserialize, Serialize};

use partials_types::ActivePartial;

/// One sinusoid handed to the sound driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency: f64,
    pub amplitude: f64,
}

impl From<&ActivePartial> for Tone {
    fn from(partial: &ActivePartial) -> Self {
        Self {
            frequency: partial.frequency,
            amplitude: partial.amplitude,
        }
    }
}
