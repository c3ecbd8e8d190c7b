//! Services the host engine provides to the behavior machine.
//!
//! The machine never performs scene lookups or pathfinding itself.  Together
//! with [`npc_sense::WorldQuery`] these traits are everything it needs from
//! the outside world.

use npc_core::Point3;

/// Path-following agent that walks toward a destination.
///
/// Destination requests are fire-and-forget: the machine never waits for
/// arrival, it polls [`remaining_distance`][Self::remaining_distance] on
/// later ticks.
pub trait Navigator {
    /// Replace the current destination.
    fn set_destination(&mut self, destination: Point3);

    /// Distance still to travel to the current destination.  Hosts report
    /// `0.0` when there is no destination.
    fn remaining_distance(&self) -> f32;
}

/// Resolves the single tracked target.
pub trait TargetLocator {
    /// Where the target is now, or `None` if it cannot be resolved this tick.
    fn current_target_position(&self) -> Option<Point3>;
}
