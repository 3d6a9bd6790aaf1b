use crate::{parse_number, ChangeEvent, DispatchResult, SessionAction, SessionState};

pub(super) fn reduce(action: &SessionAction, session: &mut SessionState) -> DispatchResult {
    let freq = match action {
        SessionAction::SetBaseFreq(text) => parse_number(text),
        SessionAction::SelectBaseFreq(preset) => Some(preset.hz()),
    };
    match freq {
        Some(freq) if session.set_base_freq(freq) => {
            DispatchResult::with_event(ChangeEvent::BaseFreqChanged)
        }
        _ => DispatchResult::rejected(match action {
            SessionAction::SetBaseFreq(text) => {
                format!("base frequency '{}' must be a number > 0", text)
            }
            SessionAction::SelectBaseFreq(preset) => {
                format!("base frequency {} refused", preset.name())
            }
        }),
    }
}
