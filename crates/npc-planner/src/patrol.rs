//! Patrol destinations: random points in a rectangle, or a fixed loop of
//! waypoints.
//!
//! # Route model
//!
//! An agent patrols one of two route shapes:
//!
//! - **Area** - a `width × depth` rectangle on the ground plane centred on
//!   `center`.  Each new destination is drawn uniformly from the rectangle at
//!   the centre's height.  Arrival is judged by the navigator.
//! - **Waypoints** - an ordered, non-empty loop.  The planner keeps a cursor
//!   that only moves forward (wrapping at the end) when the caller calls
//!   [`PatrolPlanner::advance`], which it does after the agent arrives.

use npc_core::error::ensure_non_negative;
use npc_core::{AgentRng, Point3};

use crate::{PlannerError, PlannerResult};

// ── PatrolRoute ───────────────────────────────────────────────────────────────

/// The shape of an agent's patrol.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PatrolRoute {
    /// Sample points inside a ground-plane rectangle.
    Area {
        center: Point3,
        /// Extent along x.
        width: f32,
        /// Extent along z.
        depth: f32,
    },
    /// Visit these points in order, looping back to the first.
    Waypoints(Vec<Point3>),
}

impl PatrolRoute {
    /// Reject empty waypoint loops and negative or non-finite area sizes.
    pub fn validate(&self) -> PlannerResult<()> {
        match self {
            PatrolRoute::Area { width, depth, .. } => {
                ensure_non_negative("patrol area width", *width)?;
                ensure_non_negative("patrol area depth", *depth)?;
                Ok(())
            }
            PatrolRoute::Waypoints(points) if points.is_empty() => Err(PlannerError::EmptyRoute),
            PatrolRoute::Waypoints(_) => Ok(()),
        }
    }
}

// ── PatrolPlanner ─────────────────────────────────────────────────────────────

/// Produces patrol destinations for one agent.
#[derive(Clone, Debug)]
pub struct PatrolPlanner {
    route: PatrolRoute,
    /// Cursor into `PatrolRoute::Waypoints`; always 0 for area routes.
    index: usize,
    /// Distance below which a waypoint counts as reached.
    waypoint_arrival_threshold: f32,
}

impl PatrolPlanner {
    /// Validate `route` and start at its first waypoint.
    pub fn new(route: PatrolRoute, waypoint_arrival_threshold: f32) -> PlannerResult<Self> {
        route.validate()?;
        ensure_non_negative("waypoint_arrival_threshold", waypoint_arrival_threshold)?;
        Ok(Self { route, index: 0, waypoint_arrival_threshold })
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    /// `true` for waypoint loops, `false` for area sampling.
    #[inline]
    pub fn is_waypoint_route(&self) -> bool {
        matches!(self.route, PatrolRoute::Waypoints(_))
    }

    /// Current waypoint cursor (always 0 for area routes).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The waypoint the agent is currently walking to, if this is a
    /// waypoint route.
    pub fn current_waypoint(&self) -> Option<Point3> {
        match &self.route {
            PatrolRoute::Waypoints(points) => Some(points[self.index]),
            PatrolRoute::Area { .. } => None,
        }
    }

    /// The next patrol destination.
    ///
    /// For an area route this draws a fresh random point on every call, so
    /// only call it once the agent has arrived at the previous one.  For a
    /// waypoint route it returns the current waypoint without moving the
    /// cursor.
    pub fn next(&self, rng: &mut AgentRng) -> Point3 {
        match &self.route {
            PatrolRoute::Area { center, width, depth } => {
                let half_w = width * 0.5;
                let half_d = depth * 0.5;
                let x = rng.gen_range(-half_w..=half_w);
                let z = rng.gen_range(-half_d..=half_d);
                *center + Point3::new(x, 0.0, z)
            }
            PatrolRoute::Waypoints(points) => points[self.index],
        }
    }

    /// Whether an agent at `position` has reached the current waypoint.
    ///
    /// Always `false` for area routes; their arrival is judged from the
    /// navigator's remaining distance instead.
    pub fn arrived(&self, position: Point3) -> bool {
        match self.current_waypoint() {
            Some(waypoint) => position.distance(waypoint) < self.waypoint_arrival_threshold,
            None => false,
        }
    }

    /// Move the cursor to the following waypoint, wrapping to the first
    /// after the last.  No-op for area routes.
    pub fn advance(&mut self) {
        if let PatrolRoute::Waypoints(points) = &self.route {
            self.index = (self.index + 1) % points.len();
        }
    }

    /// Min and max corners of the patrol rectangle, for debug drawing.
    pub fn area_bounds(&self) -> Option<(Point3, Point3)> {
        match &self.route {
            PatrolRoute::Area { center, width, depth } => {
                let half = Point3::new(width * 0.5, 0.0, depth * 0.5);
                Some((*center - half, *center + half))
            }
            PatrolRoute::Waypoints(_) => None,
        }
    }
}
