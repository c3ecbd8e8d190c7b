//! What happened during a tick, reported back to the host.

use npc_core::Point3;

use crate::BehaviorState;

/// Produced by [`BehaviorStateMachine::advance`][crate::BehaviorStateMachine::advance].
///
/// Events are reports, not requests: the navigator has already been told
/// about any destination by the time the host sees them.  Attacks are the
/// exception in that the machine only announces them; applying damage or
/// playing an animation is up to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorEvent {
    /// The active state changed this tick.
    Transition {
        from: BehaviorState,
        to:   BehaviorState,
    },

    /// The navigator was handed a new destination.
    DestinationRequested(Point3),

    /// The agent struck at the target.
    Attack {
        target:   Point3,
        distance: f32,
    },
}
