//! Host-facing facade: one agent with its injected services.

use npc_core::{AgentId, AgentRng, Pose};
use npc_sense::WorldQuery;

use crate::{
    BehaviorConfig, BehaviorError, BehaviorEvent, BehaviorResult, BehaviorState,
    BehaviorStateMachine, Diagnostics, Navigator, TargetLocator, TickContext,
};

/// A behavior machine bundled with the navigator, world query, and target
/// locator it was constructed with.
///
/// This is the integration point for a host engine that keeps one object per
/// NPC: build it once at spawn, then call [`advance`][Self::advance] every
/// frame with the agent's current pose.
///
/// # Example
///
/// ```rust,ignore
/// let config = BehaviorConfig::waypoints(route).with_waiting(2.0).with_attack(1.5);
/// let mut guard = Agent::new(AgentId(0), &config, nav_agent, physics, player, seed)?;
///
/// // every frame
/// for event in guard.advance(frame_dt, Pose::new(position, forward)) {
///     if let BehaviorEvent::Attack { .. } = event {
///         play_swing_animation();
///     }
/// }
/// ```
pub struct Agent<N, W, L> {
    machine:   BehaviorStateMachine,
    navigator: N,
    world:     W,
    locator:   L,
    rng:       AgentRng,
}

impl<N, W, L> Agent<N, W, L>
where
    N: Navigator,
    W: WorldQuery,
    L: TargetLocator,
{
    /// Validate `config` and wire the services together.
    ///
    /// Fails with [`BehaviorError::MissingTarget`] if `locator` cannot
    /// resolve a target right now: a sentry without a target is a scene
    /// setup error, not something to discover tick by tick.
    pub fn new(
        id:        AgentId,
        config:    &BehaviorConfig,
        navigator: N,
        world:     W,
        locator:   L,
        seed:      u64,
    ) -> BehaviorResult<Self> {
        if locator.current_target_position().is_none() {
            return Err(BehaviorError::MissingTarget);
        }
        let machine = BehaviorStateMachine::new(id, config)?;
        Ok(Self {
            machine,
            navigator,
            world,
            locator,
            rng: AgentRng::new(seed, id),
        })
    }

    /// Run one tick covering `dt` seconds with the agent at `pose`.
    pub fn advance(&mut self, dt: f32, pose: Pose) -> Vec<BehaviorEvent> {
        let ctx = TickContext::new(pose, self.locator.current_target_position(), &self.world);
        self.machine.advance(dt, &ctx, &mut self.navigator, &mut self.rng)
    }

    #[inline]
    pub fn state(&self) -> BehaviorState {
        self.machine.state()
    }

    #[inline]
    pub fn machine(&self) -> &BehaviorStateMachine {
        &self.machine
    }

    #[inline]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable access for hosts that move the navigator themselves.
    #[inline]
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn diagnostics(&self, pose: Pose) -> Diagnostics {
        self.machine.diagnostics(pose)
    }
}
