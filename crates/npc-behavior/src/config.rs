//! Per-agent behavior configuration.
//!
//! One `BehaviorConfig` covers every deployment shape: area or waypoint
//! patrol, with or without the search, waiting, and attack phases.  A phase
//! is switched off by leaving its `Option` field as `None`.

use npc_core::error::ensure_non_negative;
use npc_core::Point3;
use npc_planner::{PatrolPlanner, PatrolRoute, SearchPlanner};
use npc_sense::VisionSensor;

use crate::BehaviorResult;

/// Distance below which the navigator counts as "arrived".
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 0.5;

/// Distance below which a patrol waypoint counts as reached.
pub const DEFAULT_WAYPOINT_ARRIVAL_THRESHOLD: f32 = 1.0;

/// Tag a ray hit must carry for the target to count as seen.
pub const DEFAULT_TARGET_TAG: &str = "Player";

/// Search-phase parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSettings {
    /// Seconds spent searching before giving up and returning to patrol.
    pub wait_time: f32,
    /// Radius around the last known target position to search.
    pub radius: f32,
}

/// Immutable configuration for one agent, validated when the agent's
/// [`BehaviorStateMachine`][crate::BehaviorStateMachine] is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorConfig {
    /// Maximum sensing distance.  Must be `> 0`.
    pub vision_range: f32,

    /// Full vision cone angle in degrees, in `(0, 360]`.
    pub vision_angle: f32,

    /// Area or waypoint patrol.
    pub patrol: PatrolRoute,

    /// `None` → losing the target returns straight to patrol.
    #[cfg_attr(feature = "serde", serde(default))]
    pub search: Option<SearchSettings>,

    /// Pause at each waypoint, in seconds.  Ignored for area routes.
    /// `None` → the agent walks on to the next waypoint without stopping.
    #[cfg_attr(feature = "serde", serde(default))]
    pub waiting_time: Option<f32>,

    /// Chasing escalates to attacking below this distance.
    /// `None` → the agent never attacks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_range: Option<f32>,

    #[cfg_attr(feature = "serde", serde(default = "default_arrival_threshold"))]
    pub arrival_threshold: f32,

    #[cfg_attr(feature = "serde", serde(default = "default_waypoint_arrival_threshold"))]
    pub waypoint_arrival_threshold: f32,

    #[cfg_attr(feature = "serde", serde(default = "default_target_tag"))]
    pub target_tag: String,
}

#[cfg(feature = "serde")]
fn default_arrival_threshold() -> f32 {
    DEFAULT_ARRIVAL_THRESHOLD
}

#[cfg(feature = "serde")]
fn default_waypoint_arrival_threshold() -> f32 {
    DEFAULT_WAYPOINT_ARRIVAL_THRESHOLD
}

#[cfg(feature = "serde")]
fn default_target_tag() -> String {
    DEFAULT_TARGET_TAG.to_owned()
}

/// Validated components built from a [`BehaviorConfig`].
pub(crate) struct Parts {
    pub sensor: VisionSensor,
    pub patrol: PatrolPlanner,
    pub search: Option<SearchPlanner>,
}

impl BehaviorConfig {
    /// The simplest sentry: patrol `patrol`, chase on sight, fall back to
    /// patrol on loss.  Vision defaults to 15 units inside a 90° cone.
    pub fn new(patrol: PatrolRoute) -> Self {
        Self {
            vision_range:               15.0,
            vision_angle:               90.0,
            patrol,
            search:                     None,
            waiting_time:               None,
            attack_range:               None,
            arrival_threshold:          DEFAULT_ARRIVAL_THRESHOLD,
            waypoint_arrival_threshold: DEFAULT_WAYPOINT_ARRIVAL_THRESHOLD,
            target_tag:                 DEFAULT_TARGET_TAG.to_owned(),
        }
    }

    /// Shorthand for an area-sampling patrol.
    pub fn area(center: Point3, width: f32, depth: f32) -> Self {
        Self::new(PatrolRoute::Area { center, width, depth })
    }

    /// Shorthand for a waypoint loop.
    pub fn waypoints(points: Vec<Point3>) -> Self {
        Self::new(PatrolRoute::Waypoints(points))
    }

    pub fn with_vision(mut self, range: f32, angle_deg: f32) -> Self {
        self.vision_range = range;
        self.vision_angle = angle_deg;
        self
    }

    pub fn with_search(mut self, wait_time: f32, radius: f32) -> Self {
        self.search = Some(SearchSettings { wait_time, radius });
        self
    }

    pub fn with_waiting(mut self, waiting_time: f32) -> Self {
        self.waiting_time = Some(waiting_time);
        self
    }

    pub fn with_attack(mut self, attack_range: f32) -> Self {
        self.attack_range = Some(attack_range);
        self
    }

    /// Check every field without building a machine.
    pub fn validate(&self) -> BehaviorResult<()> {
        self.build_parts().map(|_| ())
    }

    pub(crate) fn build_parts(&self) -> BehaviorResult<Parts> {
        let sensor = VisionSensor::new(self.vision_range, self.vision_angle, self.target_tag.as_str())?;
        let patrol = PatrolPlanner::new(self.patrol.clone(), self.waypoint_arrival_threshold)?;
        let search = match self.search {
            Some(settings) => {
                ensure_non_negative("search wait_time", settings.wait_time)?;
                Some(SearchPlanner::new(settings.radius)?)
            }
            None => None,
        };
        if let Some(waiting_time) = self.waiting_time {
            ensure_non_negative("waiting_time", waiting_time)?;
        }
        if let Some(attack_range) = self.attack_range {
            ensure_non_negative("attack_range", attack_range)?;
        }
        ensure_non_negative("arrival_threshold", self.arrival_threshold)?;

        Ok(Parts { sensor, patrol, search })
    }
}
