//! Application state: the editable session plus everything derived from it.

use partials_types::{
    active_partials, analyze, sounding_partials, ActivePartial, ClashRecord, IsolationState,
    SessionDefaults, SessionState,
};

use crate::playback::VoiceTracker;

/// Frequency of a note `semitones` away from `base_freq` in 12-TET.
pub fn compute_frequency(base_freq: f64, semitones: f64) -> f64 {
    partials_types::frequency(base_freq, semitones)
}

/// Top-level state owned by the engine.
///
/// The derived lists are rebuilt in full by [`AppState::recompute`] after
/// every change; nothing is patched incrementally.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: SessionState,
    /// Tones most recently sent to the playback backend, per note.
    pub voices: VoiceTracker,
    active: Vec<ActivePartial>,
    sounding: Vec<ActivePartial>,
    clashes: Vec<ClashRecord>,
}

impl AppState {
    pub fn new() -> Self {
        Self::new_with_defaults(SessionDefaults::default())
    }

    pub fn new_with_defaults(defaults: SessionDefaults) -> Self {
        let mut state = Self {
            session: SessionState::new_with_defaults(defaults),
            voices: VoiceTracker::new(),
            active: Vec::new(),
            sounding: Vec::new(),
            clashes: Vec::new(),
        };
        state.recompute();
        state
    }

    pub fn recompute(&mut self) {
        self.active = active_partials(&self.session);
        self.sounding = sounding_partials(&self.session);
        // Clashes are always reported on the normal partial list so that the
        // table keeps its rows while a pair is isolated.
        self.clashes = analyze(&self.active);
    }

    /// Partials of every playing note over every enabled overtone.
    pub fn active_partials(&self) -> &[ActivePartial] {
        &self.active
    }

    /// Partials actually audible right now (isolation applied).
    pub fn sounding_partials(&self) -> &[ActivePartial] {
        &self.sounding
    }

    /// The cached sounding partials grouped per note position (`notes.len()`
    /// entries, empty for silent notes).
    pub fn sounding_by_note(&self) -> Vec<Vec<ActivePartial>> {
        let mut by_note = vec![Vec::new(); self.session.notes.len()];
        for partial in &self.sounding {
            if let Some(note) = by_note.get_mut(partial.note_index) {
                note.push(*partial);
            }
        }
        by_note
    }

    pub fn clash_report(&self) -> &[ClashRecord] {
        &self.clashes
    }

    pub fn isolation(&self) -> &IsolationState {
        &self.session.isolation
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
