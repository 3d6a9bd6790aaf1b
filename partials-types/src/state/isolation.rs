//! Isolation: audition a single clash by muting everything else.

use serde::{Deserialize, Serialize};

use crate::OvertoneId;

/// A partial addressed by note position and stable overtone id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialRef {
    pub note: usize,
    pub overtone: OvertoneId,
}

/// The ordered pair of partials that make up one clash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsolationSelection {
    pub first: PartialRef,
    pub second: PartialRef,
}

impl IsolationSelection {
    pub fn new(first: PartialRef, second: PartialRef) -> Self {
        Self { first, second }
    }

    /// Overtones `note` should sound while isolated: the first partial's
    /// overtone if it belongs to `note`, then the second's. A note that owns
    /// both partials sounds both.
    pub fn overtones_for_note(&self, note: usize) -> Vec<OvertoneId> {
        [self.first, self.second]
            .into_iter()
            .filter(|p| p.note == note)
            .map(|p| p.overtone)
            .collect()
    }
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsolationTransition {
    Entered,
    Cleared,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsolationState {
    #[default]
    Normal,
    Isolated(IsolationSelection),
}

impl IsolationState {
    /// Isolate `selection` when nothing is isolated. When anything is already
    /// isolated the toggle always returns to normal, whichever clash was
    /// requested; switching clashes takes two toggles.
    pub fn toggle(&mut self, selection: IsolationSelection) -> IsolationTransition {
        match self {
            IsolationState::Normal => {
                *self = IsolationState::Isolated(selection);
                IsolationTransition::Entered
            }
            IsolationState::Isolated(_) => {
                *self = IsolationState::Normal;
                IsolationTransition::Cleared
            }
        }
    }

    /// Returns true if a selection was dropped.
    pub fn clear(&mut self) -> bool {
        let was_isolated = self.is_isolated();
        *self = IsolationState::Normal;
        was_isolated
    }

    pub fn is_isolated(&self) -> bool {
        matches!(self, IsolationState::Isolated(_))
    }

    pub fn selection(&self) -> Option<&IsolationSelection> {
        match self {
            IsolationState::Normal => None,
            IsolationState::Isolated(selection) => Some(selection),
        }
    }
}
