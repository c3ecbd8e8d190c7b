//! Vision cone sensing with occlusion.

use glam::Quat;
use npc_core::error::ensure_positive;
use npc_core::geo::angle_between_deg;
use npc_core::{Point3, Pose};

use crate::{SenseError, SenseResult, WorldQuery};

/// A cone of 360° or more never rejects on angle.
const FULL_CIRCLE_DEG: f32 = 360.0;

/// Range + field-of-view + line-of-sight perception test.
///
/// Holds only configuration; call [`can_perceive`][Self::can_perceive] once
/// per tick.
#[derive(Debug, Clone)]
pub struct VisionSensor {
    range:      f32,
    angle_deg:  f32,
    target_tag: String,
}

impl VisionSensor {
    /// Build a sensor seeing up to `range` units inside a cone of
    /// `angle_deg` degrees (full angle, not half).
    ///
    /// A ray hit only counts as the target if its tag equals `target_tag`.
    pub fn new(range: f32, angle_deg: f32, target_tag: impl Into<String>) -> SenseResult<Self> {
        ensure_positive("vision_range", range)?;
        if !(angle_deg > 0.0 && angle_deg <= FULL_CIRCLE_DEG) {
            return Err(SenseError::InvalidAngle(angle_deg));
        }
        Ok(Self { range, angle_deg, target_tag: target_tag.into() })
    }

    #[inline]
    pub fn range(&self) -> f32 {
        self.range
    }

    #[inline]
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    #[inline]
    pub fn half_angle_deg(&self) -> f32 {
        self.angle_deg * 0.5
    }

    #[inline]
    pub fn target_tag(&self) -> &str {
        &self.target_tag
    }

    /// Range and cone check only - no occlusion test.
    pub fn in_field_of_view(&self, agent_pos: Point3, agent_forward: Point3, target_pos: Point3) -> bool {
        let direction = target_pos - agent_pos;
        if direction.length() > self.range {
            return false;
        }
        self.angle_deg >= FULL_CIRCLE_DEG
            || angle_between_deg(agent_forward, direction) < self.half_angle_deg()
    }

    /// Whether the target at `target_pos` is perceivable this tick.
    ///
    /// `last_sighting` is the position recorded the last time this returned
    /// `true`.  If the target still stands exactly there (and is inside the
    /// cone) it is reported as seen without casting a ray.  This is an
    /// approximation: an obstacle that appears between two ticks while the
    /// target stays still is not noticed until the target moves.
    pub fn can_perceive<W: WorldQuery + ?Sized>(
        &self,
        agent_pos:     Point3,
        agent_forward: Point3,
        target_pos:    Point3,
        last_sighting: Option<Point3>,
        world:         &W,
    ) -> bool {
        if !self.in_field_of_view(agent_pos, agent_forward, target_pos) {
            return false;
        }
        if last_sighting == Some(target_pos) {
            return true;
        }

        let direction = target_pos - agent_pos;
        let distance = direction.length();
        if distance == 0.0 {
            // Nothing can stand between an agent and a target it overlaps.
            return true;
        }

        match world.cast_ray(agent_pos, direction / distance, distance) {
            Some(hit) => hit.tag == self.target_tag,
            None      => false,
        }
    }

    /// Field-of-view geometry for external visualisation.
    pub fn cone(&self, pose: Pose) -> VisionCone {
        let forward = pose.forward.normalize_or_zero() * self.range;
        let half = self.half_angle_deg().to_radians();
        VisionCone {
            origin:         pose.position,
            range:          self.range,
            half_angle_deg: self.half_angle_deg(),
            edges: [
                pose.position + Quat::from_axis_angle(Point3::Y, half) * forward,
                pose.position + Quat::from_axis_angle(Point3::Y, -half) * forward,
            ],
        }
    }
}

/// Read-only snapshot of a sensor's field of view, for debug drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionCone {
    /// Apex of the cone (the agent's position).
    pub origin: Point3,
    /// Radius of the sensing sphere.
    pub range: f32,
    pub half_angle_deg: f32,
    /// End points of the two boundary rays, each `range` away from `origin`,
    /// obtained by rotating the forward vector ±half-angle about +Y.
    pub edges: [Point3; 2],
}
