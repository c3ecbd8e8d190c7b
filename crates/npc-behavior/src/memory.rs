//! Mutable per-agent memory of the target and phase timers.

use npc_core::Point3;

/// Owned by the [`BehaviorStateMachine`][crate::BehaviorStateMachine];
/// exposed read-only for diagnostics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetMemory {
    /// Where the target was at the most recent successful sighting.
    /// `None` until the agent has seen it once.
    pub last_known_position: Option<Point3>,
    /// Seconds spent in the current search.  Reset on entering `Searching`.
    pub search_elapsed: f32,
    /// Seconds spent at the current waypoint.  Reset on entering `Waiting`.
    pub wait_elapsed: f32,
}
