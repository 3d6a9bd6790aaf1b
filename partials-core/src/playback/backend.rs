//! Playback backend trait: what the engine means to do with a note's voice
//! (start it with a set of tones, stop it), independent of the sound driver.
//! Lets dispatch be tested without audio hardware.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Tone;

/// Result type for backend operations.
pub type BackendResult<T = ()> = Result<T, BackendError>;

/// Error from a backend operation.
#[derive(Debug, Clone)]
pub struct BackendError(pub String);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BackendError {}

/// Semantic-level playback backend.
///
/// A note's voice is either silent or sounding a fixed list of tones. The
/// engine never starts a note that is already sounding: parameter changes
/// arrive as `stop_note` followed by `start_note`.
pub trait PlaybackBackend: Send {
    /// Start one oscillator per tone for `note`.
    fn start_note(&self, note: usize, tones: &[Tone]) -> BackendResult;

    /// Stop every oscillator of `note`.
    fn stop_note(&self, note: usize) -> BackendResult;
}

/// Backend that discards everything. Used when no sound driver is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl PlaybackBackend for NullBackend {
    fn start_note(&self, _note: usize, _tones: &[Tone]) -> BackendResult {
        Ok(())
    }

    fn stop_note(&self, _note: usize) -> BackendResult {
        Ok(())
    }
}

/// An operation recorded by `TestBackend` for assertion in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackOp {
    Start { note: usize, tones: Vec<Tone> },
    Stop(usize),
}

/// Recording backend for tests.
///
/// All operations succeed. Tracks which notes are live so tests can check
/// that a note is never started twice without a stop in between.
#[derive(Default)]
pub struct TestBackend {
    ops: Mutex<Vec<PlaybackOp>>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PlaybackOp>> {
        self.ops.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return all recorded operations.
    pub fn operations(&self) -> Vec<PlaybackOp> {
        self.lock().clone()
    }

    /// Clear recorded operations.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Count operations matching a predicate.
    pub fn count<F: Fn(&PlaybackOp) -> bool>(&self, f: F) -> usize {
        self.lock().iter().filter(|op| f(op)).count()
    }

    /// Find the first operation matching a predicate.
    pub fn find<F: Fn(&PlaybackOp) -> bool>(&self, f: F) -> Option<PlaybackOp> {
        self.lock().iter().find(|op| f(op)).cloned()
    }

    /// Replay the recorded operations and return the tones each note is
    /// sounding now.
    pub fn live_notes(&self) -> BTreeMap<usize, Vec<Tone>> {
        let mut live = BTreeMap::new();
        for op in self.lock().iter() {
            match op {
                PlaybackOp::Start { note, tones } => {
                    live.insert(*note, tones.clone());
                }
                PlaybackOp::Stop(note) => {
                    live.remove(note);
                }
            }
        }
        live
    }

    /// Number of starts issued for a note that was already sounding.
    /// Each one would leave the earlier oscillators orphaned.
    pub fn overlapping_starts(&self) -> usize {
        let mut live = BTreeMap::new();
        let mut overlaps = 0;
        for op in self.lock().iter() {
            match op {
                PlaybackOp::Start { note, .. } => {
                    if live.insert(*note, ()).is_some() {
                        overlaps += 1;
                    }
                }
                PlaybackOp::Stop(note) => {
                    live.remove(note);
                }
            }
        }
        overlaps
    }
}

impl PlaybackBackend for TestBackend {
    fn start_note(&self, note: usize, tones: &[Tone]) -> BackendResult {
        self.lock().push(PlaybackOp::Start {
            note,
            tones: tones.to_vec(),
        });
        Ok(())
    }

    fn stop_note(&self, note: usize) -> BackendResult {
        self.lock().push(PlaybackOp::Stop(note));
        Ok(())
    }
}
