//! Read-only per-tick input passed to the behavior machine.

use npc_core::{Point3, Pose};
use npc_sense::WorldQuery;

/// A snapshot of everything the machine reads during one tick.
///
/// Built by the host before calling
/// [`BehaviorStateMachine::advance`][crate::BehaviorStateMachine::advance].
/// All borrows live for that single call.
pub struct TickContext<'a> {
    /// The agent's position and facing this tick.
    pub pose: Pose,

    /// The target's current position, or `None` if it cannot be resolved.
    /// An unresolved target is never perceived.
    pub target: Option<Point3>,

    /// Occlusion queries for the vision sensor.
    pub world: &'a dyn WorldQuery,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(pose: Pose, target: Option<Point3>, world: &'a dyn WorldQuery) -> Self {
        Self { pose, target, world }
    }
}
