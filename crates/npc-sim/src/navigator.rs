//! Constant-speed straight-line navigator.

use npc_behavior::Navigator;
use npc_core::error::ensure_non_negative;
use npc_core::{Point3, Pose};

use crate::SimResult;

/// Moves an agent in a straight line toward its destination at a fixed
/// speed, ignoring obstacles.
///
/// Stands in for an engine navmesh agent: the behavior machine only ever
/// calls [`set_destination`][Navigator::set_destination] and polls
/// [`remaining_distance`][Navigator::remaining_distance]; the sim calls
/// [`step`][Self::step] once per tick to integrate movement.
#[derive(Clone, Debug)]
pub struct StraightLineNavigator {
    position:    Point3,
    forward:     Point3,
    destination: Option<Point3>,
    speed:       f32,
}

impl StraightLineNavigator {
    /// Place an agent at `pose`, idle, moving at `speed` units per second
    /// once given a destination.
    pub fn new(pose: Pose, speed: f32) -> SimResult<Self> {
        ensure_non_negative("speed", speed)?;
        Ok(Self {
            position:    pose.position,
            forward:     pose.forward,
            destination: None,
            speed,
        })
    }

    #[inline]
    pub fn position(&self) -> Point3 {
        self.position
    }

    #[inline]
    pub fn destination(&self) -> Option<Point3> {
        self.destination
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current position and facing.  Facing follows the last movement
    /// direction and is kept unchanged while standing still.
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.forward)
    }

    /// Advance `dt` seconds.  Never overshoots the destination.
    pub fn step(&mut self, dt: f32) {
        let Some(destination) = self.destination else {
            return;
        };
        let offset = destination - self.position;
        let remaining = offset.length();
        if remaining <= f32::EPSILON {
            self.position = destination;
            return;
        }

        let travel = self.speed * dt;
        let direction = offset / remaining;
        if travel >= remaining {
            self.position = destination;
        } else {
            self.position += direction * travel;
        }
        if travel > 0.0 {
            self.forward = direction;
        }
    }
}

impl Navigator for StraightLineNavigator {
    fn set_destination(&mut self, destination: Point3) {
        self.destination = Some(destination);
    }

    fn remaining_distance(&self) -> f32 {
        self.destination.map_or(0.0, |d| self.position.distance(d))
    }
}
