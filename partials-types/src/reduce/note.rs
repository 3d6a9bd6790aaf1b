use crate::{parse_number, ChangeEvent, DispatchResult, NoteAction, SessionState};

pub(super) fn reduce(action: &NoteAction, session: &mut SessionState) -> DispatchResult {
    match action {
        NoteAction::SetPitch(index, text) => {
            let Some(semitones) = parse_number(text) else {
                return DispatchResult::rejected(format!(
                    "note {}: '{}' is not a number",
                    index + 1,
                    text
                ));
            };
            if session.notes.set_pitch(*index, semitones) {
                DispatchResult::with_event(ChangeEvent::NoteChanged(*index))
            } else {
                DispatchResult::rejected(format!("no note {}", index + 1))
            }
        }
        NoteAction::SetPlaying(index, playing) => {
            if session.notes.set_playing(*index, *playing) {
                DispatchResult::with_event(ChangeEvent::NoteChanged(*index))
            } else {
                DispatchResult::rejected(format!("no note {}", index + 1))
            }
        }
    }
}
