//! Read-only view for debug overlays.

use npc_core::Point3;
use npc_sense::VisionCone;

use crate::BehaviorState;

/// Everything a debug overlay needs to draw one agent.
///
/// Built by [`BehaviorStateMachine::diagnostics`][crate::BehaviorStateMachine::diagnostics];
/// holds copies, so it can outlive the machine borrow.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub state: BehaviorState,
    /// Vision sphere radius and the two field-of-view edges.
    pub vision: VisionCone,
    pub last_known_position: Option<Point3>,
    pub destination: Option<Point3>,
    /// `(min, max)` corners of the patrol rectangle, for area routes.
    pub patrol_area: Option<(Point3, Point3)>,
    /// The waypoint currently being walked to, for waypoint routes.
    pub current_waypoint: Option<Point3>,
}
