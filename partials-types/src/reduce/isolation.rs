use crate::{ChangeEvent, DispatchResult, IsolationAction, IsolationTransition, SessionState};

pub(super) fn reduce(action: &IsolationAction, session: &mut SessionState) -> DispatchResult {
    match action {
        IsolationAction::Toggle(selection) => {
            // Leaving isolation never looks at the requested selection
            if !session.isolation.is_isolated() && !session.is_selection_valid(selection) {
                return DispatchResult::rejected(
                    "clash refers to an overtone that no longer exists",
                );
            }
            let transition = session.isolation.toggle(*selection);
            DispatchResult::with_event(ChangeEvent::Isolation(transition))
        }
        IsolationAction::Clear => {
            if session.isolation.clear() {
                DispatchResult::with_event(ChangeEvent::Isolation(IsolationTransition::Cleared))
            } else {
                DispatchResult::none()
            }
        }
    }
}
