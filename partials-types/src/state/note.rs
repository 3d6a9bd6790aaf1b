//! The fixed bank of notes.

use serde::{Deserialize, Serialize};

use crate::pitch::frequency;

/// Number of notes in the reference configuration.
pub const DEFAULT_NOTE_COUNT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Offset from the global base frequency, in (possibly fractional) semitones.
    pub semitones: f64,
    pub playing: bool,
}

impl Note {
    /// This note's fundamental for the given global base frequency.
    pub fn fundamental(&self, base_freq: f64) -> f64 {
        frequency(base_freq, self.semitones)
    }
}

/// Notes are created once and addressed by position (0-based internally,
/// 1-based when shown to the user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteBank {
    pub notes: Vec<Note>,
}

impl Default for NoteBank {
    fn default() -> Self {
        Self::new(DEFAULT_NOTE_COUNT)
    }
}

impl NoteBank {
    pub fn new(count: usize) -> Self {
        Self {
            notes: vec![Note::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Returns false for a missing index or a non-finite offset.
    pub fn set_pitch(&mut self, index: usize, semitones: f64) -> bool {
        if !semitones.is_finite() {
            return false;
        }
        match self.notes.get_mut(index) {
            Some(note) => {
                note.semitones = semitones;
                true
            }
            None => false,
        }
    }

    pub fn set_playing(&mut self, index: usize, playing: bool) -> bool {
        match self.notes.get_mut(index) {
            Some(note) => {
                note.playing = playing;
                true
            }
            None => false,
        }
    }

    /// Playing notes with their bank positions, in bank order.
    pub fn playing(&self) -> impl Iterator<Item = (usize, &Note)> {
        self.notes.iter().enumerate().filter(|(_, n)| n.playing)
    }
}
