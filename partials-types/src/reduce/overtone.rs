use crate::{parse_number, ChangeEvent, DispatchResult, OvertoneAction, SessionState};

pub(super) fn reduce(action: &OvertoneAction, session: &mut SessionState) -> DispatchResult {
    let overtones = &mut session.overtones;
    let changed = match action {
        OvertoneAction::SelectPreset(preset) => {
            overtones.select_preset(*preset);
            true
        }
        OvertoneAction::Add => {
            overtones.add_partial();
            true
        }
        OvertoneAction::Remove(index) => overtones.remove_partial(*index).is_some(),
        OvertoneAction::SetEnabled(index, enabled) => overtones.set_enabled(*index, *enabled),
        OvertoneAction::SetMultiplier(index, text) => match parse_number(text) {
            Some(value) => overtones.set_multiplier(*index, value),
            None => false,
        },
        OvertoneAction::SetMagnitude(index, text) => match parse_number(text) {
            Some(value) => overtones.set_magnitude(*index, value),
            None => false,
        },
        OvertoneAction::SyncCustom(rows) => {
            overtones.sync_custom(rows);
            true
        }
    };
    if changed {
        DispatchResult::with_event(ChangeEvent::OvertonesChanged)
    } else {
        DispatchResult::rejected(rejection(action))
    }
}

fn rejection(action: &OvertoneAction) -> String {
    match action {
        OvertoneAction::SetMultiplier(index, text) => {
            format!("overtone {}: multiplier '{}' must be a number > 0", index + 1, text)
        }
        OvertoneAction::SetMagnitude(index, text) => {
            format!("overtone {}: magnitude '{}' must be a number >= 0", index + 1, text)
        }
        OvertoneAction::Remove(index) | OvertoneAction::SetEnabled(index, _) => {
            format!("no overtone {}", index + 1)
        }
        _ => "overtone edit refused".to_string(),
    }
}
