//! The `Sim` struct and its tick loop.

use npc_behavior::{BehaviorEvent, BehaviorStateMachine, TickContext};
use npc_core::{AgentId, AgentRng, Point3, SimClock, SimConfig};
use npc_sense::WorldQuery;

use crate::world::{Collider, ObstacleWorld, SceneView};
use crate::{SimObserver, SimResult, StraightLineNavigator, TargetScript};

// ── SimAgent ──────────────────────────────────────────────────────────────────

/// One simulated sentry: its behavior machine plus the services the sim
/// provides it.
#[derive(Clone, Debug)]
pub struct SimAgent {
    pub machine:   BehaviorStateMachine,
    pub navigator: StraightLineNavigator,
    pub rng:       AgentRng,
}

impl SimAgent {
    #[inline]
    pub fn id(&self) -> AgentId {
        self.machine.agent()
    }

    /// Decide, then move.  Reads only the shared scene, so agents can step
    /// in parallel.
    fn step(&mut self, dt: f32, target: Option<Point3>, scene: &dyn WorldQuery) -> Vec<BehaviorEvent> {
        let ctx = TickContext::new(self.navigator.pose(), target, scene);
        let events = self.machine.advance(dt, &ctx, &mut self.navigator, &mut self.rng);
        self.navigator.step(dt);
        events
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick:
///
/// 1. **Target**: evaluate the target script at the clock's elapsed time.
/// 2. **Scene**: wrap the static obstacles and the target collider into a
///    read-only [`SceneView`].
/// 3. **Agents** (optionally parallel with the `parallel` feature): run one
///    behavior step, then integrate navigator movement over the tick.
/// 4. **Report** (sequential, ascending `AgentId`): hand every event to the
///    observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<T: TargetScript> {
    /// Tick duration, run length, and seed.
    pub config: SimConfig,

    /// Tracks the current tick and maps it to elapsed seconds.
    pub clock: SimClock,

    /// Static scene geometry.
    pub obstacles: ObstacleWorld,

    /// Target movement.
    pub target: T,

    /// Radius of the target's collider.
    pub target_radius: f32,

    /// Tag carried by the target's collider.
    pub target_tag: String,

    /// Agents, indexed by `AgentId`.
    pub agents: Vec<SimAgent>,
}

impl<T: TargetScript> Sim<T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer);
        }
        Ok(())
    }

    /// The target's position at the current tick, if it exists.
    pub fn target_position(&self) -> Option<Point3> {
        self.target.position_at(self.clock.elapsed_secs())
    }

    pub fn agent(&self, id: AgentId) -> Option<&SimAgent> {
        self.agents.get(id.index())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let per_agent = self.step_agents();

        let mut count = 0;
        for (agent, events) in per_agent {
            for event in &events {
                observer.on_event(now, agent, event);
            }
            count += events.len();
        }
        tracing::trace!(tick = %now, events = count, "tick complete");
        observer.on_tick_end(now, count);

        self.clock.advance();
    }

    /// Step every agent once.  Results come back in ascending `AgentId`
    /// order whether or not the step ran in parallel.
    fn step_agents(&mut self) -> Vec<(AgentId, Vec<BehaviorEvent>)> {
        let dt = self.config.tick_duration_secs;
        let target = self.target_position();
        let collider = target.map(|p| Collider::new(p, self.target_radius, self.target_tag.as_str()));

        // Explicit field borrows so the borrow checker sees disjoint access.
        let scene  = SceneView::new(&self.obstacles, collider);
        let agents = &mut self.agents;

        #[cfg(not(feature = "parallel"))]
        {
            agents
                .iter_mut()
                .map(|a| (a.id(), a.step(dt, target, &scene)))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents
                .par_iter_mut()
                .map(|a| (a.id(), a.step(dt, target, &scene)))
                .collect()
        }
    }
}
