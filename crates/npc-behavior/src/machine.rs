//! The per-agent behavior state machine.
//!
//! # Tick structure
//!
//! Every call to [`BehaviorStateMachine::advance`] runs the same four steps:
//!
//! ```text
//! ① Perceive  - one VisionSensor query; a sighting refreshes the memory.
//! ② Decide    - the current state's transition rule picks the next state.
//! ③ Enter     - if the state changed, run the new state's entry behavior.
//! ④ Act       - run the active state's per-tick action.
//! ```
//!
//! # Transition table
//!
//! | From       | To          | When                                            |
//! |------------|-------------|-------------------------------------------------|
//! | Patrolling | Chasing     | target perceived                                |
//! | Patrolling | Waiting     | waypoint reached (waiting enabled)              |
//! | Waiting    | Chasing     | target perceived (preempts the pause)           |
//! | Waiting    | Patrolling  | `wait_elapsed >= waiting_time`; cursor advances |
//! | Chasing    | Attacking   | perceived and closer than `attack_range`        |
//! | Chasing    | Searching   | target lost (search enabled)                    |
//! | Chasing    | Patrolling  | target lost (search disabled)                   |
//! | Searching  | Chasing     | target perceived                                |
//! | Searching  | Patrolling  | `search_elapsed >= wait_time`                   |
//! | Attacking  | Chasing     | always, on the following tick                   |
//!
//! Attacking never re-checks range on its way out: the agent strikes, goes
//! back to chasing, and only escalates again if the next tick still finds the
//! target in range.

use npc_core::{AgentId, AgentRng, Point3, Pose};
use npc_planner::{PatrolPlanner, SearchPlanner};
use npc_sense::VisionSensor;

use crate::config::Parts;
use crate::{
    BehaviorConfig, BehaviorEvent, BehaviorResult, BehaviorState, Diagnostics, Navigator,
    TargetMemory, TickContext,
};

/// Search planner plus how long to keep searching.
#[derive(Clone, Debug)]
struct SearchPhase {
    planner:   SearchPlanner,
    wait_time: f32,
}

/// Decides, once per tick, what one agent does and where it walks.
///
/// Owns the agent's state, target memory, and planner cursor exclusively.
/// The state only changes inside [`advance`][Self::advance].
#[derive(Clone, Debug)]
pub struct BehaviorStateMachine {
    agent:  AgentId,
    state:  BehaviorState,
    memory: TargetMemory,
    sensor: VisionSensor,
    patrol: PatrolPlanner,
    search: Option<SearchPhase>,
    /// Only `Some` for waypoint routes with waiting enabled.
    waiting_time: Option<f32>,
    attack_range: Option<f32>,
    arrival_threshold: f32,
    /// Last destination handed to the navigator.
    destination: Option<Point3>,
}

impl BehaviorStateMachine {
    /// Validate `config` and start in [`BehaviorState::INITIAL`].
    pub fn new(agent: AgentId, config: &BehaviorConfig) -> BehaviorResult<Self> {
        let Parts { sensor, patrol, search } = config.build_parts()?;

        let search = search.zip(config.search).map(|(planner, settings)| SearchPhase {
            planner,
            wait_time: settings.wait_time,
        });
        let waiting_time = config.waiting_time.filter(|_| patrol.is_waypoint_route());

        Ok(Self {
            agent,
            state: BehaviorState::INITIAL,
            memory: TargetMemory::default(),
            sensor,
            patrol,
            search,
            waiting_time,
            attack_range: config.attack_range,
            arrival_threshold: config.arrival_threshold,
            destination: None,
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn state(&self) -> BehaviorState {
        self.state
    }

    #[inline]
    pub fn memory(&self) -> &TargetMemory {
        &self.memory
    }

    #[inline]
    pub fn sensor(&self) -> &VisionSensor {
        &self.sensor
    }

    #[inline]
    pub fn patrol(&self) -> &PatrolPlanner {
        &self.patrol
    }

    /// The last destination handed to the navigator, if any.
    #[inline]
    pub fn destination(&self) -> Option<Point3> {
        self.destination
    }

    /// Geometry and state for external visualisation at `pose`.
    pub fn diagnostics(&self, pose: Pose) -> Diagnostics {
        Diagnostics {
            state:               self.state,
            vision:              self.sensor.cone(pose),
            last_known_position: self.memory.last_known_position,
            destination:         self.destination,
            patrol_area:         self.patrol.area_bounds(),
            current_waypoint:    self.patrol.current_waypoint(),
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one evaluation step covering `dt` seconds.
    ///
    /// Calls into `navigator` for any destination change and returns what
    /// happened, in order.  A negative or NaN `dt` counts as zero, so the
    /// wait and search timers never run backwards.
    pub fn advance<N: Navigator + ?Sized>(
        &mut self,
        dt:        f32,
        ctx:       &TickContext<'_>,
        navigator: &mut N,
        rng:       &mut AgentRng,
    ) -> Vec<BehaviorEvent> {
        let dt = dt.max(0.0);
        let mut events = Vec::new();

        let seen = self.perceive(ctx);
        let next = self.next_state(dt, seen, ctx);

        if next != self.state {
            let from = self.state;
            tracing::debug!(agent = %self.agent, %from, to = %next, "behavior transition");
            events.push(BehaviorEvent::Transition { from, to: next });
            self.state = next;
            self.enter(ctx, navigator, &mut events);
        }

        self.act(ctx, navigator, rng, &mut events);
        events
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Query the sensor once and record the sighting.
    fn perceive(&mut self, ctx: &TickContext<'_>) -> bool {
        let Some(target) = ctx.target else {
            return false;
        };
        let seen = self.sensor.can_perceive(
            ctx.pose.position,
            ctx.pose.forward,
            target,
            self.memory.last_known_position,
            ctx.world,
        );
        if seen {
            self.memory.last_known_position = Some(target);
        }
        seen
    }

    /// The transition function.  Timers accumulate here so a state that is
    /// preempted this tick never counts the tick toward its timer.
    fn next_state(&mut self, dt: f32, seen: bool, ctx: &TickContext<'_>) -> BehaviorState {
        use BehaviorState::*;

        match self.state {
            Patrolling => {
                if seen {
                    Chasing
                } else if self.patrol.arrived(ctx.pose.position) {
                    if self.waiting_time.is_some() {
                        Waiting
                    } else {
                        self.patrol.advance();
                        Patrolling
                    }
                } else {
                    Patrolling
                }
            }

            Waiting => {
                if seen {
                    return Chasing;
                }
                self.memory.wait_elapsed += dt;
                match self.waiting_time {
                    Some(limit) if self.memory.wait_elapsed < limit => Waiting,
                    _ => {
                        self.patrol.advance();
                        Patrolling
                    }
                }
            }

            Chasing => {
                if !seen {
                    if self.search.is_some() { Searching } else { Patrolling }
                } else if self.target_in_attack_range(ctx) {
                    Attacking
                } else {
                    Chasing
                }
            }

            Searching => {
                if seen {
                    return Chasing;
                }
                self.memory.search_elapsed += dt;
                let wait_time = self.search.as_ref().map_or(0.0, |s| s.wait_time);
                if self.memory.search_elapsed >= wait_time { Patrolling } else { Searching }
            }

            Attacking => Chasing,
        }
    }

    fn target_in_attack_range(&self, ctx: &TickContext<'_>) -> bool {
        match (self.attack_range, ctx.target) {
            (Some(range), Some(target)) => ctx.pose.position.distance(target) < range,
            _ => false,
        }
    }

    /// Entry behavior of the state just switched to.
    fn enter<N: Navigator + ?Sized>(
        &mut self,
        ctx:       &TickContext<'_>,
        navigator: &mut N,
        events:    &mut Vec<BehaviorEvent>,
    ) {
        match self.state {
            BehaviorState::Waiting => {
                self.memory.wait_elapsed = 0.0;
                self.request(ctx.pose.position, navigator, events);
            }
            BehaviorState::Searching => {
                self.memory.search_elapsed = 0.0;
            }
            BehaviorState::Attacking => {
                if let Some(target) = ctx.target {
                    let distance = ctx.pose.position.distance(target);
                    tracing::info!(agent = %self.agent, distance, "attack");
                    events.push(BehaviorEvent::Attack { target, distance });
                }
            }
            BehaviorState::Patrolling | BehaviorState::Chasing => {}
        }
    }

    /// Per-tick action of the active state.
    fn act<N: Navigator + ?Sized>(
        &mut self,
        ctx:       &TickContext<'_>,
        navigator: &mut N,
        rng:       &mut AgentRng,
        events:    &mut Vec<BehaviorEvent>,
    ) {
        match self.state {
            BehaviorState::Patrolling => {
                if let Some(waypoint) = self.patrol.current_waypoint() {
                    if self.destination != Some(waypoint) {
                        self.request(waypoint, navigator, events);
                    }
                } else if navigator.remaining_distance() < self.arrival_threshold {
                    let point = self.patrol.next(rng);
                    self.request(point, navigator, events);
                }
            }

            BehaviorState::Chasing => {
                if let Some(target) = ctx.target {
                    self.request(target, navigator, events);
                }
            }

            BehaviorState::Searching => {
                if navigator.remaining_distance() < self.arrival_threshold {
                    let next = match (&self.search, self.memory.last_known_position) {
                        (Some(phase), Some(last_known)) => Some(phase.planner.next(last_known, rng)),
                        _ => None,
                    };
                    if let Some(point) = next {
                        self.request(point, navigator, events);
                    }
                }
            }

            BehaviorState::Waiting | BehaviorState::Attacking => {}
        }
    }

    fn request<N: Navigator + ?Sized>(
        &mut self,
        destination: Point3,
        navigator:   &mut N,
        events:      &mut Vec<BehaviorEvent>,
    ) {
        tracing::trace!(agent = %self.agent, state = %self.state, ?destination, "destination");
        navigator.set_destination(destination);
        self.destination = Some(destination);
        events.push(BehaviorEvent::DestinationRequested(destination));
    }
}
