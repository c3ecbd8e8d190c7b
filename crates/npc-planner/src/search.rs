//! Search destinations around the target's last known position.

use npc_core::error::ensure_non_negative;
use npc_core::{AgentRng, Point3};

use crate::PlannerResult;

/// Samples search points after the agent loses sight of its target.
#[derive(Clone, Debug)]
pub struct SearchPlanner {
    radius: f32,
}

impl SearchPlanner {
    pub fn new(radius: f32) -> PlannerResult<Self> {
        ensure_non_negative("search radius", radius)?;
        Ok(Self { radius })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// A point drawn uniformly from the ball of `radius` around
    /// `last_known`, flattened onto `last_known`'s height so the agent never
    /// aims above or below the ground the target stood on.
    pub fn next(&self, last_known: Point3, rng: &mut AgentRng) -> Point3 {
        let mut point = last_known + unit_ball_sample(rng) * self.radius;
        point.y = last_known.y;
        point
    }
}

/// Rejection-sample a point inside the unit ball.
fn unit_ball_sample(rng: &mut AgentRng) -> Point3 {
    loop {
        let candidate = Point3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if candidate.length_squared() <= 1.0 {
            return candidate;
        }
    }
}
