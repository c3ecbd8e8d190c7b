//! Sphere-collider world used to answer line-of-sight raycasts.
//!
//! # Model
//!
//! Every solid is a tagged sphere.  A ray reports the nearest surface it
//! crosses within `max_distance`; a ray starting inside a sphere reports
//! that sphere at distance zero.  The target is not a static obstacle: the
//! sim wraps the static [`ObstacleWorld`] in a per-tick [`SceneView`] that
//! adds the target's collider at its current position.

use npc_core::Point3;
use npc_sense::{RayHit, WorldQuery};

// ── Collider ──────────────────────────────────────────────────────────────────

/// A tagged sphere.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collider {
    pub center: Point3,
    pub radius: f32,
    pub tag:    String,
}

impl Collider {
    pub fn new(center: Point3, radius: f32, tag: impl Into<String>) -> Self {
        Self { center, radius, tag: tag.into() }
    }

    /// Distance along `direction` (unit length) from `origin` to this
    /// sphere's surface, or `None` if the ray misses or the sphere is
    /// entirely behind the origin.  An origin inside the sphere hits at `0`.
    pub fn intersect(&self, origin: Point3, direction: Point3) -> Option<f32> {
        let to_origin = origin - self.center;
        let c = to_origin.length_squared() - self.radius * self.radius;
        if c <= 0.0 {
            return Some(0.0);
        }
        let b = to_origin.dot(direction);
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// Nearest hit among `colliders` within `max_distance`.
fn nearest_hit<'a>(
    colliders:    impl IntoIterator<Item = &'a Collider>,
    origin:       Point3,
    direction:    Point3,
    max_distance: f32,
) -> Option<(&'a Collider, f32)> {
    colliders
        .into_iter()
        .filter_map(|c| c.intersect(origin, direction).map(|t| (c, t)))
        .filter(|&(_, t)| t <= max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

// ── ObstacleWorld ─────────────────────────────────────────────────────────────

/// Static scene geometry.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObstacleWorld {
    colliders: Vec<Collider>,
}

impl ObstacleWorld {
    pub fn new(colliders: Vec<Collider>) -> Self {
        Self { colliders }
    }

    pub fn add(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl WorldQuery for ObstacleWorld {
    fn cast_ray(&self, origin: Point3, direction: Point3, max_distance: f32) -> Option<RayHit> {
        nearest_hit(&self.colliders, origin, direction, max_distance)
            .map(|(c, t)| RayHit::new(c.tag.as_str(), t))
    }
}

// ── SceneView ─────────────────────────────────────────────────────────────────

/// Static obstacles plus the target's collider for one tick.
pub struct SceneView<'a> {
    obstacles: &'a ObstacleWorld,
    target:    Option<Collider>,
}

impl<'a> SceneView<'a> {
    pub fn new(obstacles: &'a ObstacleWorld, target: Option<Collider>) -> Self {
        Self { obstacles, target }
    }
}

impl WorldQuery for SceneView<'_> {
    fn cast_ray(&self, origin: Point3, direction: Point3, max_distance: f32) -> Option<RayHit> {
        let colliders = self.obstacles.colliders.iter().chain(self.target.as_ref());
        nearest_hit(colliders, origin, direction, max_distance)
            .map(|(c, t)| RayHit::new(c.tag.as_str(), t))
    }
}
