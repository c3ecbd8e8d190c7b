//! Scenario file format.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use npc_behavior::config::DEFAULT_TARGET_TAG;
use npc_core::{Point3, SimConfig};
use npc_sim::builder::DEFAULT_TARGET_RADIUS;
use npc_sim::{AgentSpawn, Collider, LoopingTarget, ObstacleWorld, Sim, SimBuilder, StationaryTarget, TargetScript};

/// Scenario used when no path is given on the command line.
pub const BUILT_IN: &str = include_str!("../scenario.json");

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetSpec {
    Stationary { position: Point3 },
    Looping { points: Vec<Point3>, speed: f32 },
}

impl TargetSpec {
    fn into_script(self) -> Result<Box<dyn TargetScript>> {
        Ok(match self {
            TargetSpec::Stationary { position } => Box::new(StationaryTarget::new(position)),
            TargetSpec::Looping { points, speed } => Box::new(LoopingTarget::new(points, speed)?),
        })
    }
}

fn default_target_radius() -> f32 {
    DEFAULT_TARGET_RADIUS
}

fn default_target_tag() -> String {
    DEFAULT_TARGET_TAG.to_owned()
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub sim:    SimConfig,
    pub target: TargetSpec,
    #[serde(default = "default_target_radius")]
    pub target_radius: f32,
    /// Tag on the target's collider.  Agents only perceive the target when
    /// their `behavior.target_tag` matches it.
    #[serde(default = "default_target_tag")]
    pub target_tag: String,
    #[serde(default)]
    pub obstacles: Vec<Collider>,
    pub agents: Vec<AgentSpawn>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parsing scenario JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Validate everything and build a ready-to-run sim.
    pub fn build(self) -> Result<Sim<Box<dyn TargetScript>>> {
        let sim = SimBuilder::new(self.sim, self.target.into_script()?)
            .target_collider(self.target_radius, self.target_tag)
            .obstacles(ObstacleWorld::new(self.obstacles))
            .agents(self.agents)
            .build()?;
        Ok(sim)
    }
}
