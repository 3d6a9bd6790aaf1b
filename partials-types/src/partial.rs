//! Derivation of sounding partials from notes × the current overtone set.
//!
//! Nothing here is cached: every call rebuilds the list from the session.

use serde::{Deserialize, Serialize};

use crate::state::{IsolationState, Overtone, PartialRef, SessionState};
use crate::OvertoneId;

/// One sinusoid of one note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePartial {
    pub note_index: usize,
    /// Raw position of the overtone in the current set.
    pub overtone_index: usize,
    pub overtone_id: OvertoneId,
    pub frequency: f64,
    pub amplitude: f64,
}

impl ActivePartial {
    fn new(
        note_index: usize,
        overtone_index: usize,
        overtone: &Overtone,
        fundamental: f64,
    ) -> Self {
        Self {
            note_index,
            overtone_index,
            overtone_id: overtone.id,
            frequency: fundamental * overtone.multiplier,
            amplitude: overtone.magnitude,
        }
    }

    pub fn partial_ref(&self) -> PartialRef {
        PartialRef {
            note: self.note_index,
            overtone: self.overtone_id,
        }
    }
}

/// Partials a note sounds in normal playback: one per enabled overtone.
pub fn note_partials(
    note_index: usize,
    fundamental: f64,
    overtones: &[Overtone],
) -> Vec<ActivePartial> {
    overtones
        .iter()
        .enumerate()
        .filter(|(_, o)| o.enabled)
        .map(|(i, o)| ActivePartial::new(note_index, i, o, fundamental))
        .collect()
}

/// Partials a note sounds while `ids` are isolated for it. The enabled flag
/// is ignored; ids missing from the set contribute nothing.
pub fn isolated_note_partials(
    note_index: usize,
    fundamental: f64,
    overtones: &[Overtone],
    ids: &[OvertoneId],
) -> Vec<ActivePartial> {
    ids.iter()
        .filter_map(|id| {
            overtones
                .iter()
                .position(|o| o.id == *id)
                .map(|i| ActivePartial::new(note_index, i, &overtones[i], fundamental))
        })
        .collect()
}

/// Normal-playback partials of every playing note, in note order then
/// overtone order. This is the clash analyzer's input.
pub fn active_partials(session: &SessionState) -> Vec<ActivePartial> {
    let overtones = session.overtones.current();
    session
        .notes
        .playing()
        .flat_map(|(i, note)| note_partials(i, note.fundamental(session.base_freq), overtones))
        .collect()
}

/// Partials that should actually be heard. Same as [`active_partials`] in
/// normal mode; while isolated, only the two selected partials sound and
/// playing notes outside the selection are silent.
pub fn sounding_partials(session: &SessionState) -> Vec<ActivePartial> {
    let selection = match &session.isolation {
        IsolationState::Normal => return active_partials(session),
        IsolationState::Isolated(selection) => selection,
    };
    let overtones = session.overtones.current();
    session
        .notes
        .playing()
        .flat_map(|(i, note)| {
            let ids = selection.overtones_for_note(i);
            isolated_note_partials(i, note.fundamental(session.base_freq), overtones, &ids)
        })
        .collect()
}
