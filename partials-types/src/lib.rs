//! # partials-types
//!
//! Shared type definitions for the partials explorer: the tone model (notes,
//! overtone stacks, presets), equal-tempered pitch math, the clash analyzer and
//! the action enums that drive every state change.
//!
//! Everything in this crate is pure. Playback, configuration and logging live
//! in partials-core.

pub mod action;
pub mod clash;
pub mod dispatch;
mod param;
pub mod partial;
pub mod pitch;
pub mod reduce;
pub mod state;

pub use action::*;
pub use clash::{analyze, is_clash, ClashRecord, ABS_CLASH_HZ, REL_CLASH_SEMITONES};
pub use dispatch::Dispatcher;
pub use param::parse_number;
pub use partial::{active_partials, sounding_partials, ActivePartial};
pub use pitch::{frequency, BaseFreqPreset};

// Re-export all state types at crate root for convenience
pub use state::*;

/// Stable identifier for an overtone. Survives reordering and removal of its
/// neighbours, unlike the overtone's position in the current set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct OvertoneId(u32);

impl OvertoneId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for OvertoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
