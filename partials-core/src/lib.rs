//! # partials-core
//!
//! Engine for the partials explorer: owns the session, rebuilds derived state
//! (active partials, clash report) after every action, and turns the result
//! into playback commands for an external sound driver.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use partials_core::config::Config;
//! use partials_core::dispatch::LocalDispatcher;
//! use partials_core::playback::NullBackend;
//! use partials_core::state::AppState;
//! use partials_core::action::{Action, NoteAction};
//! use partials_types::Dispatcher;
//!
//! let config = Config::load();
//! let mut state = AppState::new_with_defaults(config.defaults());
//! let backend = NullBackend;
//! let mut dispatcher = LocalDispatcher::new(&mut state, &backend);
//!
//! let result = dispatcher.dispatch(&Action::Note(NoteAction::SetPlaying(0, true)));
//! if result.changed() {
//!     // re-render from dispatcher.state.clash_report()
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`state`]: `AppState`, the session plus its derived partial / clash lists
//! - [`action`]: action enums and `DispatchResult` (re-exported from partials-types)
//! - [`dispatch`]: `dispatch_action()`, the single entry point for mutation, and
//!   `LocalDispatcher`, which also drives a playback backend
//! - [`playback`]: `PlaybackBackend` trait, null / recording backends, voice tracking
//! - [`config`]: TOML configuration (embedded defaults + user override)
//! - [`interaction_log`]: JSONL action log and replay

pub mod action;
pub mod config;
pub mod dispatch;
pub mod interaction_log;
pub mod playback;
pub mod state;
