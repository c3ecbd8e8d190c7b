//! Simulation observer trait for progress reporting and data collection.

use npc_behavior::BehaviorEvent;
use npc_core::{AgentId, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: transition logger
///
/// ```rust,ignore
/// struct TransitionLog;
///
/// impl SimObserver for TransitionLog {
///     fn on_event(&mut self, tick: Tick, agent: AgentId, event: &BehaviorEvent) {
///         if let BehaviorEvent::Transition { from, to } = event {
///             println!("{tick} {agent}: {from} -> {to}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per behavior event, after every agent has stepped.
    ///
    /// Events arrive grouped by agent in ascending `AgentId` order, and in
    /// production order within one agent.
    fn on_event(&mut self, _tick: Tick, _agent: AgentId, _event: &BehaviorEvent) {}

    /// Called at the end of each tick.  `events` is the number of events
    /// reported through `on_event` this tick.
    fn on_tick_end(&mut self, _tick: Tick, _events: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
