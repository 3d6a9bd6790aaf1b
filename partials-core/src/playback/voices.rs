//! Per-note voice bookkeeping.
//!
//! `VoiceTracker` remembers the tones each note was last started with and,
//! given the freshly derived sounding partials, emits the minimal set of
//! stop/start effects to bring the backend in line. A changed note is always
//! stopped before it is restarted.

use partials_types::ActivePartial;

use super::Tone;
use crate::dispatch::PlaybackSideEffect;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceTracker {
    voices: Vec<Vec<Tone>>,
}

impl VoiceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tones the note was last started with; empty when silent.
    pub fn tones(&self, note: usize) -> &[Tone] {
        self.voices.get(note).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn sounding_count(&self) -> usize {
        self.voices.iter().filter(|v| !v.is_empty()).count()
    }

    pub fn sync(&mut self, desired: &[Vec<ActivePartial>], effects: &mut Vec<PlaybackSideEffect>) {
        if self.voices.len() < desired.len() {
            self.voices.resize(desired.len(), Vec::new());
        }
        for (note, current) in self.voices.iter_mut().enumerate() {
            let wanted: Vec<Tone> = desired
                .get(note)
                .map(|partials| partials.iter().map(Tone::from).collect())
                .unwrap_or_default();
            if *current == wanted {
                continue;
            }
            if !current.is_empty() {
                effects.push(PlaybackSideEffect::StopNote { note });
            }
            if !wanted.is_empty() {
                effects.push(PlaybackSideEffect::StartNote {
                    note,
                    tones: wanted.clone(),
                });
            }
            *current = wanted;
        }
    }

    pub fn silence_all(&mut self, effects: &mut Vec<PlaybackSideEffect>) {
        for (note, current) in self.voices.iter_mut().enumerate() {
            if !current.is_empty() {
                effects.push(PlaybackSideEffect::StopNote { note });
                current.clear();
            }
        }
    }
}
