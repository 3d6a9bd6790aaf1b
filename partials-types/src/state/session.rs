//! The session: every piece of mutable state the engine owns.

use serde::{Deserialize, Serialize};

use super::isolation::{IsolationSelection, IsolationState};
use super::note::{NoteBank, DEFAULT_NOTE_COUNT};
use super::overtone::{OvertoneState, Preset};
use crate::pitch::{is_valid_base_freq, is_valid_frequency, BaseFreqPreset};

/// Startup settings for a new session (normally from config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDefaults {
    pub base_freq: f64,
    pub note_count: usize,
    pub preset: Preset,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            base_freq: BaseFreqPreset::A4.hz(),
            note_count: DEFAULT_NOTE_COUNT,
            preset: Preset::PureTone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Global reference frequency every note's pitch offset is relative to.
    pub base_freq: f64,
    pub notes: NoteBank,
    pub overtones: OvertoneState,
    pub isolation: IsolationState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::new_with_defaults(SessionDefaults::default())
    }

    pub fn new_with_defaults(defaults: SessionDefaults) -> Self {
        let base_freq = if is_valid_base_freq(defaults.base_freq) {
            defaults.base_freq
        } else {
            BaseFreqPreset::A4.hz()
        };
        Self {
            base_freq,
            notes: NoteBank::new(defaults.note_count),
            overtones: OvertoneState::new(defaults.preset),
            isolation: IsolationState::Normal,
        }
    }

    /// Returns false (keeping the old value) for a non-positive or non-finite frequency.
    pub fn set_base_freq(&mut self, freq: f64) -> bool {
        if !is_valid_base_freq(freq) {
            return false;
        }
        self.base_freq = freq;
        true
    }

    /// Fundamental of the note at `index`, if it exists.
    pub fn fundamental(&self, index: usize) -> Option<f64> {
        self.notes.get(index).map(|n| n.fundamental(self.base_freq))
    }

    /// Describes the first note fundamental or partial, over every note and
    /// every overtone of the current set, whose frequency is not finite and
    /// positive. `None` when all of them are in range.
    pub fn frequency_range_error(&self) -> Option<String> {
        (0..self.notes.len()).find_map(|i| {
            let fundamental = self.fundamental(i)?;
            if !is_valid_frequency(fundamental) {
                return Some(format!("note {} would sound at {} Hz", i + 1, fundamental));
            }
            self.overtones
                .current()
                .iter()
                .enumerate()
                .map(|(k, o)| (k, fundamental * o.multiplier))
                .find(|&(_, freq)| !is_valid_frequency(freq))
                .map(|(k, freq)| {
                    format!("note {} overtone {} would sound at {} Hz", i + 1, k + 1, freq)
                })
        })
    }

    /// Both referenced partials exist: the notes are in the bank and the
    /// overtones are in the current set.
    pub fn is_selection_valid(&self, selection: &IsolationSelection) -> bool {
        [selection.first, selection.second]
            .iter()
            .all(|p| p.note < self.notes.len() && self.overtones.contains(p.overtone))
    }

    /// Drop the isolation selection if either referenced partial no longer
    /// exists (overtone removed from the current set, or note out of range).
    /// Returns true if the selection was cleared.
    pub fn revalidate_isolation(&mut self) -> bool {
        let stale = match self.isolation.selection() {
            Some(selection) => !self.is_selection_valid(selection),
            None => false,
        };
        if stale {
            self.isolation.clear();
        }
        stale
    }
}
