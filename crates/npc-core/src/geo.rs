//! World-space geometry shared by the sensing, planning, and behavior crates.
//!
//! Positions are `glam::Vec3` in a right-handed, y-up frame: `x`/`z` span the
//! ground plane and `y` is height.  All lengths are in world units (metres by
//! convention).

use std::fmt;

/// A point (or direction) in world space.
pub type Point3 = glam::Vec3;

/// Squared length below which a vector is treated as having no direction.
const DEGENERATE_LEN_SQ: f32 = 1e-12;

/// Where an agent is and which way it faces, supplied by the host each tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Point3,
    /// Facing direction.  Need not be normalised; a zero vector is allowed
    /// and makes every direction count as "straight ahead".
    pub forward: Point3,
}

impl Pose {
    #[inline]
    pub fn new(position: Point3, forward: Point3) -> Self {
        Self { position, forward }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}) facing ({:.2}, {:.2}, {:.2})",
            self.position.x, self.position.y, self.position.z,
            self.forward.x, self.forward.y, self.forward.z,
        )
    }
}

/// Unsigned angle between `a` and `b` in degrees, in `[0, 180]`.
///
/// If either vector is (numerically) zero-length the angle is undefined; this
/// returns `0.0` instead so callers never see NaN.
pub fn angle_between_deg(a: Point3, b: Point3) -> f32 {
    let len_sq = a.length_squared() * b.length_squared();
    if len_sq <= DEGENERATE_LEN_SQ {
        return 0.0;
    }
    let cos = (a.dot(b) / len_sq.sqrt()).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
