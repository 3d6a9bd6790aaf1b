//! Plain-text views of the explorer state. Every number shown to the user is
//! 1-based; frequencies carry two decimals.

use std::fmt::Write;

use partials_core::state::AppState;
use partials_types::ClashRecord;

pub fn render_notes(state: &AppState) -> String {
    let session = &state.session;
    let mut out = format!("base {:.2} Hz\n", session.base_freq);
    for (i, note) in session.notes.notes.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}  {:>+7.2} st  {:>9.2} Hz  {}",
            i + 1,
            note.semitones,
            note.fundamental(session.base_freq),
            if note.playing { "playing" } else { "-" }
        );
    }
    out
}

pub fn render_overtones(state: &AppState) -> String {
    let overtones = &state.session.overtones;
    let mut out = format!("preset {}\n", overtones.selected.name());
    if overtones.is_empty() {
        out.push_str("  (no overtones)\n");
    }
    for (i, o) in overtones.current().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}  x{:<6}  mag {:<6}  {}",
            i + 1,
            o.multiplier,
            o.magnitude,
            if o.enabled { "on" } else { "off" }
        );
    }
    out
}

pub fn render_partials(state: &AppState) -> String {
    let isolated = state.isolation().is_isolated();
    let partials = if isolated {
        state.sounding_partials()
    } else {
        state.active_partials()
    };
    if partials.is_empty() {
        return "no partials sounding\n".to_string();
    }
    let mut out = String::new();
    if isolated {
        out.push_str("isolated:\n");
    }
    for p in partials {
        let _ = writeln!(
            out,
            "note {} partial {}  {:.2} Hz  amp {:.2}",
            p.note_index + 1,
            p.overtone_index + 1,
            p.frequency,
            p.amplitude
        );
    }
    out
}

/// True when `clash` is the pair currently being auditioned.
fn is_isolated_row(state: &AppState, clash: &ClashRecord) -> bool {
    state
        .isolation()
        .selection()
        .is_some_and(|s| *s == clash.selection())
}

pub fn render_clashes(state: &AppState) -> String {
    let clashes = state.clash_report();
    if clashes.is_empty() {
        return "no clashes\n".to_string();
    }
    let mut out = format!(
        "{:>3}  {:>4} {:>7} {:>10}  {:>4} {:>7} {:>10}  {:>8}  {:>7}\n",
        "#", "note", "partial", "freq", "note", "partial", "freq", "|Δ| Hz", "Δ st"
    );
    for (row, clash) in clashes.iter().enumerate() {
        let marker = if is_isolated_row(state, clash) { "Unisolate" } else { "Isolate" };
        let _ = writeln!(
            out,
            "{:>3}  {:>4} {:>7} {:>10.2}  {:>4} {:>7} {:>10.2}  {:>8.2}  {:>7.2}  [{}]",
            row + 1,
            clash.a.note_index + 1,
            clash.a.overtone_index + 1,
            clash.a.frequency,
            clash.b.note_index + 1,
            clash.b.overtone_index + 1,
            clash.b.frequency,
            clash.abs_diff_hz,
            clash.rel_diff_semitones,
            marker
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use partials_core::action::{Action, IsolationAction, NoteAction};
    use partials_core::dispatch::dispatch_action;

    fn detuned_pair() -> AppState {
        let mut state = AppState::new();
        let mut effects = Vec::new();
        let actions: [Action; 3] = [
            NoteAction::SetPitch(1, "0.5".into()).into(),
            NoteAction::SetPlaying(0, true).into(),
            NoteAction::SetPlaying(1, true).into(),
        ];
        for action in &actions {
            dispatch_action(action, &mut state, &mut effects);
        }
        state
    }

    #[test]
    fn clash_rows_are_one_based_with_two_decimals() {
        let table = render_clashes(&detuned_pair());
        let row = table.lines().nth(1).unwrap();
        assert!(row.trim_start().starts_with("1 "));
        assert!(row.contains("440.00"));
        assert!(row.contains("452.89"));
        assert!(row.contains("12.89"));
        assert!(row.contains("-0.50"));
        assert!(row.ends_with("[Isolate]"));
    }

    #[test]
    fn isolated_row_offers_unisolate() {
        let mut state = detuned_pair();
        let selection = state.clash_report()[0].selection();
        let mut effects = Vec::new();
        dispatch_action(&IsolationAction::Toggle(selection).into(), &mut state, &mut effects);

        let table = render_clashes(&state);
        assert!(table.lines().nth(1).unwrap().ends_with("[Unisolate]"));
        assert!(render_partials(&state).starts_with("isolated:"));
    }

    #[test]
    fn empty_views() {
        let state = AppState::new();
        assert_eq!(render_clashes(&state), "no clashes\n");
        assert_eq!(render_partials(&state), "no partials sounding\n");
        assert!(render_overtones(&state).starts_with("preset pure-tone"));
        assert_eq!(render_notes(&state).lines().count(), 6);
    }
}
