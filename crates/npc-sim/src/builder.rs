//! Fluent builder for constructing a [`Sim`].

use npc_behavior::config::DEFAULT_TARGET_TAG;
use npc_behavior::{BehaviorConfig, BehaviorError, BehaviorStateMachine};
use npc_core::error::ensure_non_negative;
use npc_core::{AgentId, AgentRng, Point3, Pose, SimConfig};

use crate::sim::SimAgent;
use crate::world::ObstacleWorld;
use crate::{Sim, SimError, SimResult, StraightLineNavigator, TargetScript};

/// Default radius of the target's collider.
pub const DEFAULT_TARGET_RADIUS: f32 = 0.5;

/// Everything needed to place one sentry in the scene.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpawn {
    pub behavior: BehaviorConfig,
    pub position: Point3,
    pub forward:  Point3,
    /// Movement speed in units per second.
    pub speed:    f32,
}

impl AgentSpawn {
    pub fn new(behavior: BehaviorConfig, position: Point3, forward: Point3, speed: f32) -> Self {
        Self { behavior, position, forward, speed }
    }
}

/// Fluent builder for [`Sim<T>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick duration, total ticks, seed
/// - `T: TargetScript`: how the target moves
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                          |
/// |-----------------------|----------------------------------|
/// | `.agent(spawn)`       | No agents                        |
/// | `.obstacles(world)`   | `ObstacleWorld::default()`       |
/// | `.target_collider(..)`| radius `0.5`, tag `"Player"`     |
///
/// # Example
///
/// ```rust,ignore
/// let guard = AgentSpawn::new(BehaviorConfig::waypoints(route), start, Point3::Z, 3.5);
/// let mut sim = SimBuilder::new(config, LoopingTarget::new(path, 2.0)?)
///     .agent(guard)
///     .obstacles(walls)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<T: TargetScript> {
    config:        SimConfig,
    target:        T,
    target_radius: f32,
    target_tag:    String,
    obstacles:     ObstacleWorld,
    spawns:        Vec<AgentSpawn>,
}

impl<T: TargetScript> SimBuilder<T> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, target: T) -> Self {
        Self {
            config,
            target,
            target_radius: DEFAULT_TARGET_RADIUS,
            target_tag:    DEFAULT_TARGET_TAG.to_owned(),
            obstacles:     ObstacleWorld::default(),
            spawns:        Vec::new(),
        }
    }

    /// Add one agent.  Agents get `AgentId`s in the order they are added.
    pub fn agent(mut self, spawn: AgentSpawn) -> Self {
        self.spawns.push(spawn);
        self
    }

    pub fn agents(mut self, spawns: impl IntoIterator<Item = AgentSpawn>) -> Self {
        self.spawns.extend(spawns);
        self
    }

    /// Static scene geometry used for line-of-sight checks.
    pub fn obstacles(mut self, obstacles: ObstacleWorld) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Size and tag of the sphere the target occupies in the scene.
    pub fn target_collider(mut self, radius: f32, tag: impl Into<String>) -> Self {
        self.target_radius = radius;
        self.target_tag = tag.into();
        self
    }

    /// Validate inputs, build every agent, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<T>> {
        self.config.validate()?;
        ensure_non_negative("target radius", self.target_radius)?;
        if self.target.position_at(0.0).is_none() {
            return Err(BehaviorError::MissingTarget.into());
        }

        // ── Build agents ──────────────────────────────────────────────────
        let mut agents = Vec::with_capacity(self.spawns.len());
        for (i, spawn) in self.spawns.iter().enumerate() {
            let id = AgentId::try_from(i)
                .map_err(|_| SimError::Scenario(format!("agent index {i} exceeds AgentId range")))?;
            let machine = BehaviorStateMachine::new(id, &spawn.behavior)?;
            let navigator = StraightLineNavigator::new(Pose::new(spawn.position, spawn.forward), spawn.speed)?;
            agents.push(SimAgent {
                machine,
                navigator,
                rng: AgentRng::new(self.config.seed, id),
            });
        }

        tracing::info!(
            agents = agents.len(),
            obstacles = self.obstacles.len(),
            ticks = self.config.total_ticks,
            "simulation built"
        );

        Ok(Sim {
            clock:         self.config.make_clock(),
            config:        self.config,
            obstacles:     self.obstacles,
            target:        self.target,
            target_radius: self.target_radius,
            target_tag:    self.target_tag,
            agents,
        })
    }
}
