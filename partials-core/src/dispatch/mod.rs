mod local;
pub mod side_effects;

pub use local::LocalDispatcher;
pub use side_effects::{apply_side_effects, PlaybackSideEffect};

use partials_types::reduce::reduce_action;
use partials_types::IsolationTransition;

use crate::action::{Action, ChangeEvent, DispatchResult};
use crate::state::AppState;

/// Dispatch an action against `state`.
///
/// The session is mutated through the pure reducers; when anything changed,
/// every derived list is rebuilt and the playback diff is pushed into
/// `effects` for the caller to apply.
pub fn dispatch_action(
    action: &Action,
    state: &mut AppState,
    effects: &mut Vec<PlaybackSideEffect>,
) -> DispatchResult {
    log::debug!(target: "dispatch", "{:?}", action);

    let result = reduce_action(action, &mut state.session);

    if let Some(reason) = &result.rejected {
        log::warn!(target: "dispatch", "rejected {:?}: {}", action, reason);
    }
    if !result.changed() {
        return result;
    }

    state.recompute();
    let by_note = state.sounding_by_note();
    state.voices.sync(&by_note, effects);

    for event in &result.events {
        match event {
            ChangeEvent::Isolation(IsolationTransition::Entered) => {
                log::info!(
                    target: "dispatch",
                    "isolation entered: {:?}",
                    state.isolation().selection()
                );
            }
            ChangeEvent::Isolation(IsolationTransition::Cleared) => {
                log::info!(target: "dispatch", "isolation cleared");
            }
            ChangeEvent::IsolationInvalidated => {
                log::info!(target: "dispatch", "isolation cleared: selected overtone left the set");
            }
            _ => {}
        }
    }
    log::debug!(
        target: "dispatch",
        "{} active partials, {} sounding, {} clashes",
        state.active_partials().len(),
        state.sounding_partials().len(),
        state.clash_report().len()
    );

    result
}
