//! Observer trait for monitoring joint evaluation.

use crate::joint::BreakAction;
use crate::vec::Vec;

/// Hooks called while joints are stepped.
///
/// All methods default to no-ops; implement the ones you need for debugging,
/// visualization or gameplay reactions to a joint snapping.
pub trait JointObserver<V: Vec> {
    /// A joint produced a force. `force` acts on the owning body; the
    /// connected body (if any) receives its negation.
    fn on_force(&mut self, _joint: usize, _force: V) {}

    /// A joint broke with the given action.
    fn on_break(&mut self, _joint: usize, _action: BreakAction) {}

    /// Called when a host step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpObserver;

impl<V: Vec> JointObserver<V> for NoOpObserver {}
