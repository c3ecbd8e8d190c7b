//! `npc-sim` - headless host harness for the npc sentry controller.
//!
//! Stands in for a game engine during scenario runs and integration tests.
//! Agents walk in straight lines, and line of sight is tested against tagged
//! spheres.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Target   - evaluate the TargetScript at the elapsed time.
//!   ② Scene    - obstacles + target collider, read-only for the tick.
//!   ③ Agents   - BehaviorStateMachine::advance, then navigator step
//!                (parallel with the `parallel` feature).
//!   ④ Report   - observer.on_event for each event, ascending AgentId.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs the agent phase on Rayon's thread pool.             |
//! | `serde`    | Serde derives on `AgentSpawn` and the scene types.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use npc_behavior::BehaviorConfig;
//! use npc_core::{Point3, SimConfig};
//! use npc_sim::{AgentSpawn, NoopObserver, SimBuilder, StationaryTarget};
//!
//! let guard = AgentSpawn::new(BehaviorConfig::area(Point3::ZERO, 20.0, 20.0), Point3::ZERO, Point3::Z, 3.0);
//! let mut sim = SimBuilder::new(config, StationaryTarget::new(Point3::new(0.0, 0.0, 8.0)))
//!     .agent(guard)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod navigator;
pub mod observer;
pub mod sim;
pub mod target;
pub mod world;


pub use builder::{AgentSpawn, SimBuilder};
pub use error::{SimError, SimResult};
pub use navigator::StraightLineNavigator;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimAgent};
pub use target::{LoopingTarget, StationaryTarget, TargetScript};
pub use world::{Collider, ObstacleWorld, SceneView};
