//! Scripted target movement.

use npc_core::Point3;
use npc_core::error::ensure_non_negative;

use crate::{SimError, SimResult};

/// Where the target is at a given simulated time.
///
/// `None` means the target does not exist at that time (despawned, not yet
/// spawned).  Agents treat that as "not perceived".
pub trait TargetScript: Send + Sync {
    fn position_at(&self, elapsed_secs: f32) -> Option<Point3>;
}

impl<T: TargetScript + ?Sized> TargetScript for Box<T> {
    fn position_at(&self, elapsed_secs: f32) -> Option<Point3> {
        (**self).position_at(elapsed_secs)
    }
}

/// A target that never moves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationaryTarget {
    pub position: Point3,
}

impl StationaryTarget {
    pub fn new(position: Point3) -> Self {
        Self { position }
    }
}

impl TargetScript for StationaryTarget {
    fn position_at(&self, _elapsed_secs: f32) -> Option<Point3> {
        Some(self.position)
    }
}

/// A target walking a closed loop of points at constant speed, starting at
/// the first point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopingTarget {
    pub points: Vec<Point3>,
    pub speed:  f32,
}

impl LoopingTarget {
    pub fn new(points: Vec<Point3>, speed: f32) -> SimResult<Self> {
        let target = Self { points, speed };
        target.validate()?;
        Ok(target)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.points.is_empty() {
            return Err(SimError::Scenario("looping target needs at least one point".into()));
        }
        ensure_non_negative("target speed", self.speed)?;
        Ok(())
    }

    /// Length of the closed loop, including the leg back to the start.
    pub fn perimeter(&self) -> f32 {
        self.legs().map(|(a, b)| a.distance(b)).sum()
    }

    fn legs(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

impl TargetScript for LoopingTarget {
    fn position_at(&self, elapsed_secs: f32) -> Option<Point3> {
        let start = *self.points.first()?;
        let perimeter = self.perimeter();
        if perimeter <= 0.0 {
            return Some(start);
        }

        let mut travelled = (self.speed * elapsed_secs).rem_euclid(perimeter);
        for (a, b) in self.legs() {
            let leg = a.distance(b);
            if travelled <= leg {
                return Some(if leg > 0.0 { a.lerp(b, travelled / leg) } else { a });
            }
            travelled -= leg;
        }
        Some(start)
    }
}
