//! Unit tests for npc-sense.

use std::sync::atomic::{AtomicUsize, Ordering};

use npc_core::Point3;

use crate::{RayHit, VisionSensor, WorldQuery};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A world whose rays always report `tag` as the first hit at the end of the
/// ray, counting every cast.
struct ScriptedWorld {
    tag:   Option<&'static str>,
    casts: AtomicUsize,
}

impl ScriptedWorld {
    fn clear() -> Self {
        Self { tag: Some("Player"), casts: AtomicUsize::new(0) }
    }

    fn blocked() -> Self {
        Self { tag: Some("Wall"), casts: AtomicUsize::new(0) }
    }

    fn empty() -> Self {
        Self { tag: None, casts: AtomicUsize::new(0) }
    }

    fn casts(&self) -> usize {
        self.casts.load(Ordering::Relaxed)
    }
}

impl WorldQuery for ScriptedWorld {
    fn cast_ray(&self, _origin: Point3, _direction: Point3, max_distance: f32) -> Option<RayHit> {
        self.casts.fetch_add(1, Ordering::Relaxed);
        self.tag.map(|tag| RayHit::new(tag, max_distance))
    }
}

/// Range 15, 90° cone - the reference guard configuration.
fn guard_sensor() -> VisionSensor {
    VisionSensor::new(15.0, 90.0, "Player").unwrap()
}

const ORIGIN: Point3 = Point3::ZERO;
const FORWARD: Point3 = Point3::Z;

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn rejects_non_positive_range() {
        assert!(VisionSensor::new(0.0, 90.0, "Player").is_err());
        assert!(VisionSensor::new(-5.0, 90.0, "Player").is_err());
    }

    #[test]
    fn rejects_angle_outside_range() {
        assert!(VisionSensor::new(10.0, 0.0, "Player").is_err());
        assert!(VisionSensor::new(10.0, 360.5, "Player").is_err());
        assert!(VisionSensor::new(10.0, f32::NAN, "Player").is_err());
        assert!(VisionSensor::new(10.0, 360.0, "Player").is_ok());
    }

    #[test]
    fn accessors() {
        let s = guard_sensor();
        assert_eq!(s.range(), 15.0);
        assert_eq!(s.angle_deg(), 90.0);
        assert_eq!(s.half_angle_deg(), 45.0);
        assert_eq!(s.target_tag(), "Player");
    }
}

// ── Range and cone ────────────────────────────────────────────────────────────

#[cfg(test)]
mod cone_tests {
    use super::*;

    #[test]
    fn target_ahead_within_range_is_seen() {
        let world = ScriptedWorld::clear();
        let target = Point3::new(0.0, 0.0, 10.0);
        assert!(guard_sensor().can_perceive(ORIGIN, FORWARD, target, None, &world));
        assert_eq!(world.casts(), 1);
    }

    #[test]
    fn target_beyond_range_is_not_seen() {
        let world = ScriptedWorld::clear();
        let target = Point3::new(0.0, 0.0, 20.0);
        assert!(!guard_sensor().can_perceive(ORIGIN, FORWARD, target, None, &world));
    }

    #[test]
    fn target_to_the_side_is_not_seen() {
        let world = ScriptedWorld::clear();
        let target = Point3::new(5.0, 0.0, 0.0);
        assert!(!guard_sensor().can_perceive(ORIGIN, FORWARD, target, None, &world));
    }

    #[test]
    fn out_of_range_rejects_even_with_shortcut_and_any_angle() {
        let world = ScriptedWorld::clear();
        let sensor = VisionSensor::new(15.0, 360.0, "Player").unwrap();
        for target in [
            Point3::new(0.0, 0.0, 15.01),
            Point3::new(0.0, 0.0, -40.0),
            Point3::new(30.0, 5.0, 30.0),
        ] {
            assert!(!sensor.can_perceive(ORIGIN, FORWARD, target, Some(target), &world));
        }
        assert_eq!(world.casts(), 0);
    }

    #[test]
    fn boundary_distance_is_inside_range() {
        let world = ScriptedWorld::clear();
        let target = Point3::new(0.0, 0.0, 15.0);
        assert!(guard_sensor().can_perceive(ORIGIN, FORWARD, target, None, &world));
    }

    #[test]
    fn full_circle_never_rejects_on_angle() {
        let world = ScriptedWorld::clear();
        let sensor = VisionSensor::new(15.0, 360.0, "Player").unwrap();
        for target in [
            Point3::new(0.0, 0.0, -5.0), // directly behind
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(-3.0, 2.0, -3.0),
        ] {
            assert!(sensor.in_field_of_view(ORIGIN, FORWARD, target));
            assert!(sensor.can_perceive(ORIGIN, FORWARD, target, None, &world));
        }
    }

    #[test]
    fn cone_splits_on_half_angle() {
        let sensor = guard_sensor();
        // ~33.7° off axis: inside a 90° cone.
        assert!(sensor.in_field_of_view(ORIGIN, FORWARD, Point3::new(2.0, 0.0, 3.0)));
        // ~56.3° off axis: outside.
        assert!(!sensor.in_field_of_view(ORIGIN, FORWARD, Point3::new(3.0, 0.0, 2.0)));
    }

    #[test]
    fn coincident_target_is_seen_without_raycast() {
        let world = ScriptedWorld::empty();
        let p = Point3::new(2.0, 0.0, 2.0);
        assert!(guard_sensor().can_perceive(p, FORWARD, p, None, &world));
        assert_eq!(world.casts(), 0);
    }

    #[test]
    fn zero_forward_treats_everything_as_ahead() {
        let world = ScriptedWorld::clear();
        let target = Point3::new(0.0, 0.0, -5.0);
        assert!(guard_sensor().can_perceive(ORIGIN, Point3::ZERO, target, None, &world));
    }
}

// ── Occlusion ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occlusion_tests {
    use super::*;

    #[test]
    fn blocked_line_of_sight_is_not_seen() {
        let world = ScriptedWorld::blocked();
        let target = Point3::new(0.0, 0.0, 10.0);
        assert!(!guard_sensor().can_perceive(ORIGIN, FORWARD, target, None, &world));
        assert_eq!(world.casts(), 1);
    }

    #[test]
    fn ray_hitting_nothing_is_not_seen() {
        let world = ScriptedWorld::empty();
        let target = Point3::new(0.0, 0.0, 10.0);
        assert!(!guard_sensor().can_perceive(ORIGIN, FORWARD, target, None, &world));
    }

    #[test]
    fn tag_comparison_is_exact() {
        let world = ScriptedWorld::clear();
        let sensor = VisionSensor::new(15.0, 90.0, "player").unwrap();
        assert!(!sensor.can_perceive(ORIGIN, FORWARD, Point3::new(0.0, 0.0, 5.0), None, &world));
    }

    #[test]
    fn unmoved_target_skips_raycast() {
        let world = ScriptedWorld::clear();
        let sensor = guard_sensor();
        let target = Point3::new(1.0, 0.0, 8.0);

        assert!(sensor.can_perceive(ORIGIN, FORWARD, target, None, &world));
        assert_eq!(world.casts(), 1);

        // Second sighting at the identical position: no new cast.
        assert!(sensor.can_perceive(ORIGIN, FORWARD, target, Some(target), &world));
        assert_eq!(world.casts(), 1);
    }

    #[test]
    fn unmoved_target_stays_seen_behind_new_obstacle() {
        // Known approximation: the shortcut does not re-check occlusion.
        let world = ScriptedWorld::blocked();
        let target = Point3::new(0.0, 0.0, 6.0);
        assert!(guard_sensor().can_perceive(ORIGIN, FORWARD, target, Some(target), &world));
        assert_eq!(world.casts(), 0);
    }

    #[test]
    fn moved_target_is_re_tested() {
        let world = ScriptedWorld::blocked();
        let last = Point3::new(0.0, 0.0, 6.0);
        let now = Point3::new(0.0, 0.0, 6.5);
        assert!(!guard_sensor().can_perceive(ORIGIN, FORWARD, now, Some(last), &world));
        assert_eq!(world.casts(), 1);
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cone_geometry_tests {
    use npc_core::Pose;

    use super::*;

    #[test]
    fn edges_lie_on_range_sphere_at_half_angle() {
        let sensor = guard_sensor();
        let pose = Pose::new(Point3::new(1.0, 0.0, 1.0), Point3::new(0.0, 0.0, 2.0));
        let cone = sensor.cone(pose);

        assert_eq!(cone.origin, pose.position);
        assert_eq!(cone.range, 15.0);
        assert_eq!(cone.half_angle_deg, 45.0);
        for edge in cone.edges {
            let ray = edge - pose.position;
            assert!((ray.length() - 15.0).abs() < 1e-3);
            let angle = ray.angle_between(Point3::Z).to_degrees();
            assert!((angle - 45.0).abs() < 1e-2, "got {angle}");
            assert!(ray.y.abs() < 1e-4);
        }
        // The two edges sit on opposite sides of the forward axis.
        assert!((cone.edges[0].x - 1.0) * (cone.edges[1].x - 1.0) < 0.0);
    }
}
