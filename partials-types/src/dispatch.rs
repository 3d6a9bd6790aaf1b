//! Dispatch abstraction.

use crate::{Action, DispatchResult};

/// Trait for dispatching actions to the engine.
///
/// Every call runs to completion, derived state included, before it returns.
pub trait Dispatcher {
    fn dispatch(&mut self, action: &Action) -> DispatchResult;
}
