//! Pure state-mutation reducers.
//!
//! These functions are the single source of truth for action → state
//! mutations. partials-core dispatch and interaction-log replay both call in
//! here. Reducers only touch `SessionState`: they do not derive partials,
//! analyze clashes or talk to playback.

mod isolation;
mod note;
mod overtone;
mod session;

use crate::{Action, DispatchResult, SessionState};

/// Apply an action's state mutations. The result lists what changed, or why
/// the input was refused.
///
/// A change that would put any note or partial outside finite, positive
/// frequencies is rolled back and refused. Any change that drops an overtone
/// referenced by the isolation selection also clears the isolation.
pub fn reduce_action(action: &Action, session: &mut SessionState) -> DispatchResult {
    let snapshot = session.clone();
    let mut result = match action {
        Action::Note(a) => note::reduce(a, session),
        Action::Overtone(a) => overtone::reduce(a, session),
        Action::Isolation(a) => isolation::reduce(a, session),
        Action::Session(a) => session::reduce(a, session),
    };
    if !result.changed() {
        return result;
    }
    if let Some(reason) = session.frequency_range_error() {
        *session = snapshot;
        return DispatchResult::rejected(reason);
    }
    if session.revalidate_isolation() {
        result.push_event(crate::ChangeEvent::IsolationInvalidated);
    }
    result
}
