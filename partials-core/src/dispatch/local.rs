//! LocalDispatcher: Dispatcher implementation for in-process execution.

use partials_types::{Action, DispatchResult, Dispatcher};

use crate::playback::PlaybackBackend;
use crate::state::AppState;

use super::{apply_side_effects, dispatch_action};

/// Executes actions directly on in-process state and forwards the resulting
/// playback effects to a backend.
pub struct LocalDispatcher<'a> {
    pub state: &'a mut AppState,
    pub backend: &'a dyn PlaybackBackend,
}

impl<'a> LocalDispatcher<'a> {
    pub fn new(state: &'a mut AppState, backend: &'a dyn PlaybackBackend) -> Self {
        Self { state, backend }
    }

    /// Stop every sounding note. Call once at teardown.
    pub fn shutdown(&mut self) {
        let mut effects = Vec::new();
        self.state.voices.silence_all(&mut effects);
        apply_side_effects(&effects, self.backend);
    }
}

impl<'a> Dispatcher for LocalDispatcher<'a> {
    fn dispatch(&mut self, action: &Action) -> DispatchResult {
        let mut effects = Vec::new();
        let result = dispatch_action(action, self.state, &mut effects);
        apply_side_effects(&effects, self.backend);
        result
    }
}
