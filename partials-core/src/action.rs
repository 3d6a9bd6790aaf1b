//! Action types for the dispatch system, re-exported from partials-types.

pub use partials_types::{
    Action, ChangeEvent, DispatchResult, IsolationAction, NoteAction, OvertoneAction,
    SessionAction,
};
