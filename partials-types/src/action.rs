//! Action types for the dispatch system.
//!
//! Actions represent user intents. Numeric fields that a user types arrive as
//! text and are parsed by the reducers, so a bad entry is a no-op rather than
//! a NaN in the frequency math.

use serde::{Deserialize, Serialize};

use crate::pitch::BaseFreqPreset;
use crate::state::{EditableRow, IsolationSelection, IsolationTransition, Preset};

/// Per-note edits. Notes are addressed by 0-based bank position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoteAction {
    SetPitch(usize, String),
    SetPlaying(usize, bool),
}

/// Edits to the current overtone set. Overtones are addressed by their
/// position in the current set, as shown in the overtone table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OvertoneAction {
    SelectPreset(Preset),
    Add,
    Remove(usize),
    SetEnabled(usize, bool),
    SetMultiplier(usize, String),
    SetMagnitude(usize, String),
    /// Rebuild the custom set from the rows of an edited table.
    SyncCustom(Vec<EditableRow>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IsolationAction {
    Toggle(IsolationSelection),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionAction {
    SetBaseFreq(String),
    SelectBaseFreq(BaseFreqPreset),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Note(NoteAction),
    Overtone(OvertoneAction),
    Isolation(IsolationAction),
    Session(SessionAction),
}

impl From<NoteAction> for Action {
    fn from(a: NoteAction) -> Self {
        Self::Note(a)
    }
}

impl From<OvertoneAction> for Action {
    fn from(a: OvertoneAction) -> Self {
        Self::Overtone(a)
    }
}

impl From<IsolationAction> for Action {
    fn from(a: IsolationAction) -> Self {
        Self::Isolation(a)
    }
}

impl From<SessionAction> for Action {
    fn from(a: SessionAction) -> Self {
        Self::Session(a)
    }
}

// ============================================================================
// ChangeEvent and DispatchResult
// ============================================================================

/// What a dispatched action changed. Consumers re-render / re-synthesize on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeEvent {
    NoteChanged(usize),
    OvertonesChanged,
    BaseFreqChanged,
    Isolation(IsolationTransition),
    /// Isolation was dropped because a referenced overtone disappeared.
    IsolationInvalidated,
}

/// Result of dispatching an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchResult {
    pub events: Vec<ChangeEvent>,
    /// Input that was refused, with the reason. State is unchanged when set.
    pub rejected: Option<String>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_event(event: ChangeEvent) -> Self {
        Self {
            events: vec![event],
            ..Self::default()
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            rejected: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn push_event(&mut self, event: ChangeEvent) {
        self.events.push(event);
    }

    /// True when derived state (partials, clashes, playback) must be rebuilt.
    pub fn changed(&self) -> bool {
        !self.events.is_empty()
    }
}
