//! End-to-end scenarios through `LocalDispatcher` with a recording backend.

use partials_core::action::{
    Action, DispatchResult, IsolationAction, NoteAction, OvertoneAction, SessionAction,
};
use partials_core::dispatch::LocalDispatcher;
use partials_core::playback::{PlaybackOp, TestBackend};
use partials_core::state::AppState;
use partials_types::{
    BaseFreqPreset, ChangeEvent, Dispatcher, EditableRow, IsolationTransition, Preset,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

fn run(state: &mut AppState, backend: &TestBackend, actions: &[Action]) {
    let mut dispatcher = LocalDispatcher::new(state, backend);
    for action in actions {
        dispatcher.dispatch(action);
    }
}

fn dispatch(state: &mut AppState, backend: &TestBackend, action: Action) -> DispatchResult {
    LocalDispatcher::new(state, backend).dispatch(&action)
}

/// Notes 1..=3 at 0, 12 and 19 semitones, all playing, plucked-string set.
fn three_plucked_notes(backend: &TestBackend) -> AppState {
    let mut state = AppState::new();
    run(
        &mut state,
        backend,
        &[
            OvertoneAction::SelectPreset(Preset::PluckedString).into(),
            NoteAction::SetPitch(1, "12".into()).into(),
            NoteAction::SetPitch(2, "19".into()).into(),
            NoteAction::SetPlaying(0, true).into(),
            NoteAction::SetPlaying(1, true).into(),
            NoteAction::SetPlaying(2, true).into(),
        ],
    );
    state
}

#[test]
fn half_semitone_detune_clashes() {
    let backend = TestBackend::new();
    let mut state = AppState::new();
    run(
        &mut state,
        &backend,
        &[
            NoteAction::SetPitch(1, "0.5".into()).into(),
            NoteAction::SetPlaying(0, true).into(),
            NoteAction::SetPlaying(1, true).into(),
        ],
    );

    let partials = state.active_partials();
    assert_eq!(partials.len(), 2);
    assert!(approx(partials[0].frequency, 440.0));
    assert!(approx(partials[1].frequency, 452.893));

    let clashes = state.clash_report();
    assert_eq!(clashes.len(), 1);
    assert_eq!(clashes[0].a.note_index, 0);
    assert_eq!(clashes[0].b.note_index, 1);
    assert!(approx(clashes[0].abs_diff_hz, 12.893));
    assert!(approx(clashes[0].rel_diff_semitones, -0.5));
}

#[test]
fn octave_apart_pure_tones_do_not_clash() {
    let backend = TestBackend::new();
    let mut state = AppState::new();
    run(
        &mut state,
        &backend,
        &[
            NoteAction::SetPitch(1, "12".into()).into(),
            NoteAction::SetPlaying(0, true).into(),
            NoteAction::SetPlaying(1, true).into(),
        ],
    );
    assert!(approx(state.active_partials()[1].frequency, 880.0));
    assert!(state.clash_report().is_empty());
}

#[test]
fn preset_switch_rebuilds_partials_of_playing_notes() {
    let backend = TestBackend::new();
    let mut state = AppState::new();
    run(
        &mut state,
        &backend,
        &[
            NoteAction::SetPitch(1, "7".into()).into(),
            NoteAction::SetPlaying(0, true).into(),
            NoteAction::SetPlaying(1, true).into(),
        ],
    );
    assert_eq!(state.active_partials().len(), 2);
    // A fifth apart, one partial each: nothing clashes yet
    let clashes_before = state.clash_report().len();
    assert_eq!(clashes_before, 0);
    backend.clear();

    dispatch(
        &mut state,
        &backend,
        OvertoneAction::SelectPreset(Preset::PluckedString).into(),
    );
    assert_eq!(state.active_partials().len(), 10);

    // 3 x 440 (note 1, partial 3) against 2 x 659.26 (note 2, partial 2) is
    // the first pair in enumeration order to fall inside the band.
    let clashes = state.clash_report();
    assert!(clashes.len() > clashes_before);
    assert_eq!((clashes[0].a.note_index, clashes[0].a.overtone_index), (0, 2));
    assert_eq!((clashes[0].b.note_index, clashes[0].b.overtone_index), (1, 1));
    assert!(approx(clashes[0].abs_diff_hz, 1320.0 - 1318.510));
    assert_eq!(backend.count(|op| matches!(op, PlaybackOp::Stop(_))), 2);
    assert_eq!(backend.overlapping_starts(), 0);

    let live = backend.live_notes();
    assert_eq!(live[&0].len(), 5);
    assert_eq!(live[&1].len(), 5);
}

#[test]
fn isolation_partitions_playback_by_note() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    assert_eq!(state.active_partials().len(), 15);

    let clash = *state
        .clash_report()
        .iter()
        .find(|c| c.a.note_index == 0 && c.b.note_index == 1)
        .expect("notes 1 and 2 share the 880 Hz partial");
    let clashes_before = state.clash_report().to_vec();

    let result = dispatch(&mut state, &backend, IsolationAction::Toggle(clash.selection()).into());
    assert_eq!(
        result.events,
        vec![ChangeEvent::Isolation(IsolationTransition::Entered)]
    );

    let sounding = state.sounding_partials();
    assert_eq!(sounding.len(), 2);
    assert_eq!(sounding[0].partial_ref(), clash.a.partial_ref());
    assert_eq!(sounding[1].partial_ref(), clash.b.partial_ref());

    // Report rows stay put while isolated
    assert_eq!(state.clash_report(), clashes_before.as_slice());
    assert_eq!(state.active_partials().len(), 15);

    let live = backend.live_notes();
    assert_eq!(live.len(), 2);
    assert_eq!(live[&0].len(), 1);
    assert_eq!(live[&1].len(), 1);
    assert!(!live.contains_key(&2));
    assert_eq!(backend.overlapping_starts(), 0);
}

#[test]
fn toggling_twice_restores_normal_playback() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    let session_before = state.session.clone();
    let live_before = backend.live_notes();
    let selection = state.clash_report()[0].selection();

    dispatch(&mut state, &backend, IsolationAction::Toggle(selection).into());
    let result = dispatch(&mut state, &backend, IsolationAction::Toggle(selection).into());

    assert_eq!(
        result.events,
        vec![ChangeEvent::Isolation(IsolationTransition::Cleared)]
    );
    assert_eq!(state.session, session_before);
    assert_eq!(state.sounding_partials(), state.active_partials());
    assert_eq!(backend.live_notes(), live_before);
    assert_eq!(backend.overlapping_starts(), 0);
}

#[test]
fn toggling_a_different_clash_while_isolated_clears() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    let clashes = state.clash_report().to_vec();
    assert!(clashes.len() >= 2);

    dispatch(&mut state, &backend, IsolationAction::Toggle(clashes[0].selection()).into());
    dispatch(&mut state, &backend, IsolationAction::Toggle(clashes[1].selection()).into());
    assert!(!state.isolation().is_isolated());
}

#[test]
fn isolated_overtone_sounds_even_when_disabled() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    let clash = state.clash_report()[0];
    dispatch(&mut state, &backend, IsolationAction::Toggle(clash.selection()).into());

    let index = clash.a.overtone_index;
    dispatch(&mut state, &backend, OvertoneAction::SetEnabled(index, false).into());

    assert!(state.isolation().is_isolated());
    assert_eq!(state.sounding_partials().len(), 2);
    assert!(state
        .active_partials()
        .iter()
        .all(|p| p.overtone_id != clash.a.overtone_id));
}

#[test]
fn removing_isolated_overtone_returns_to_normal_playback() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    let clash = state.clash_report()[0];
    dispatch(&mut state, &backend, IsolationAction::Toggle(clash.selection()).into());

    let result = dispatch(
        &mut state,
        &backend,
        OvertoneAction::Remove(clash.a.overtone_index).into(),
    );
    assert!(result.events.contains(&ChangeEvent::IsolationInvalidated));
    assert!(!state.isolation().is_isolated());
    assert_eq!(state.active_partials().len(), 12);
    assert_eq!(state.sounding_partials(), state.active_partials());
    assert_eq!(backend.live_notes().len(), 3);
    assert_eq!(backend.overlapping_starts(), 0);
}

#[test]
fn stopping_a_note_during_isolation_silences_it() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    let clash = *state
        .clash_report()
        .iter()
        .find(|c| c.a.note_index == 0 && c.b.note_index == 1)
        .expect("clash between notes 1 and 2");
    dispatch(&mut state, &backend, IsolationAction::Toggle(clash.selection()).into());

    dispatch(&mut state, &backend, NoteAction::SetPlaying(1, false).into());
    assert_eq!(state.sounding_partials().len(), 1);
    assert!(!backend.live_notes().contains_key(&1));
}

#[test]
fn malformed_input_changes_nothing() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    let session_before = state.session.clone();
    backend.clear();

    let inputs: Vec<Action> = vec![
        NoteAction::SetPitch(0, "abc".into()).into(),
        NoteAction::SetPitch(0, "".into()).into(),
        NoteAction::SetPitch(0, "NaN".into()).into(),
        OvertoneAction::SetMultiplier(1, "x2".into()).into(),
        OvertoneAction::SetMultiplier(1, "-2".into()).into(),
        OvertoneAction::SetMagnitude(1, "loud".into()).into(),
        SessionAction::SetBaseFreq("0".into()).into(),
        SessionAction::SetBaseFreq("fast".into()).into(),
    ];
    for action in inputs {
        let result = dispatch(&mut state, &backend, action);
        assert!(result.rejected.is_some());
        assert!(result.events.is_empty());
    }

    assert_eq!(state.session, session_before);
    assert!(backend.operations().is_empty());
}

#[test]
fn base_freq_preset_moves_every_partial() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    let before: Vec<f64> = state.active_partials().iter().map(|p| p.frequency).collect();

    dispatch(&mut state, &backend, SessionAction::SelectBaseFreq(BaseFreqPreset::A3).into());
    let after: Vec<f64> = state.active_partials().iter().map(|p| p.frequency).collect();
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(&after) {
        assert!(approx(*a * 2.0, *b));
    }
    assert_eq!(backend.overlapping_starts(), 0);
}

#[test]
fn custom_set_survives_preset_round_trip() {
    let backend = TestBackend::new();
    let mut state = AppState::new();
    run(
        &mut state,
        &backend,
        &[
            OvertoneAction::SelectPreset(Preset::Custom).into(),
            OvertoneAction::SyncCustom(vec![
                EditableRow::new(true, "1", "1"),
                EditableRow::new(true, "2.01", "0.5"),
                EditableRow::new(true, "huh", "0.5"),
            ])
            .into(),
            OvertoneAction::Add.into(),
            OvertoneAction::SelectPreset(Preset::Bell).into(),
            OvertoneAction::SelectPreset(Preset::Custom).into(),
            NoteAction::SetPlaying(0, true).into(),
        ],
    );

    let freqs: Vec<f64> = state.active_partials().iter().map(|p| p.frequency).collect();
    assert_eq!(freqs.len(), 3);
    assert!(approx(freqs[0], 440.0));
    assert!(approx(freqs[1], 884.4));
    assert!(approx(freqs[2], 1320.0));
}

#[test]
fn shutdown_stops_everything() {
    let backend = TestBackend::new();
    let mut state = three_plucked_notes(&backend);
    assert_eq!(backend.live_notes().len(), 3);

    LocalDispatcher::new(&mut state, &backend).shutdown();
    assert!(backend.live_notes().is_empty());
    assert_eq!(state.voices.sounding_count(), 0);
}

#[test]
fn out_of_range_frequencies_never_reach_playback() {
    let backend = TestBackend::new();
    let mut state = AppState::new();
    run(
        &mut state,
        &backend,
        &[
            NoteAction::SetPitch(3, "12".into()).into(),
            NoteAction::SetPlaying(0, true).into(),
            NoteAction::SetPlaying(1, true).into(),
            NoteAction::SetPlaying(2, true).into(),
        ],
    );
    let session_before = state.session.clone();
    backend.clear();

    let edits: Vec<Action> = vec![
        NoteAction::SetPitch(0, "20000".into()).into(),
        NoteAction::SetPitch(1, "-20000".into()).into(),
        NoteAction::SetPitch(2, "-20000".into()).into(),
        OvertoneAction::SetMultiplier(0, "1e308".into()).into(),
        // Note 4 sits an octave up, so its fundamental overflows
        SessionAction::SetBaseFreq("1e308".into()).into(),
    ];
    for edit in edits {
        let result = dispatch(&mut state, &backend, edit);
        assert!(result.rejected.is_some());
        assert!(result.events.is_empty());
    }

    assert_eq!(state.session, session_before);
    assert!(backend.operations().is_empty());
    for partial in state.active_partials() {
        assert!(partial.frequency.is_finite() && partial.frequency > 0.0);
    }
    for clash in state.clash_report() {
        assert!(clash.abs_diff_hz.is_finite());
        assert!(clash.rel_diff_semitones.is_finite());
    }
}
