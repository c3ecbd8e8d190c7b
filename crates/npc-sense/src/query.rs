//! World raycast interface.
//!
//! The sensor never touches a physics engine directly.  Hosts implement
//! [`WorldQuery`] over whatever collision representation they have (a physics
//! scene, a tile map, a list of spheres) and the sensor only asks for the
//! first thing a ray runs into.

use npc_core::Point3;

/// The first intersection reported by a ray cast.
#[derive(Debug, Clone, PartialEq)]
pub struct RayHit {
    /// Tag of the collider that was hit (e.g. `"Player"`, `"Wall"`).
    pub tag: String,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

impl RayHit {
    pub fn new(tag: impl Into<String>, distance: f32) -> Self {
        Self { tag: tag.into(), distance }
    }
}

/// First-hit raycast service supplied by the host.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one world snapshot can be shared
/// by agents stepped in parallel.
pub trait WorldQuery: Send + Sync {
    /// Cast a ray from `origin` along the unit vector `direction`, up to
    /// `max_distance`.
    ///
    /// Returns only the nearest intersection, or `None` if nothing is hit
    /// within range.
    fn cast_ray(&self, origin: Point3, direction: Point3, max_distance: f32) -> Option<RayHit>;
}
