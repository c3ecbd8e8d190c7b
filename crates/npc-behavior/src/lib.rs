//! `npc-behavior` - the sentry behavior state machine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                         |
//! |-----------------|------------------------------------------------------------------|
//! | [`config`]      | `BehaviorConfig`, `SearchSettings`, threshold defaults           |
//! | [`state`]       | `BehaviorState` enum (`Patrolling` is the initial state)         |
//! | [`memory`]      | `TargetMemory` - last sighting and phase timers                  |
//! | [`host`]        | `Navigator` and `TargetLocator` traits the host implements       |
//! | [`context`]     | `TickContext<'a>` - read-only per-tick input                     |
//! | [`event`]       | `BehaviorEvent` (`Transition`, `DestinationRequested`, `Attack`) |
//! | [`machine`]     | `BehaviorStateMachine` - perceive, decide, enter, act            |
//! | [`agent`]       | `Agent<N, W, L>` - machine plus injected services                |
//! | [`diagnostics`] | `Diagnostics` - read-only state and geometry for debug overlays  |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! Perception and decision are separate: the
//! [`VisionSensor`][npc_sense::VisionSensor] answers "is the target visible",
//! and the transition table in [`machine`] answers "what now".  Timed phases
//! (waiting at a waypoint, searching) are elapsed-time accumulators checked
//! every tick, so a sighting interrupts them at the next tick boundary with
//! nothing to cancel.
//!
//! Hosts with one object per NPC use [`Agent`].  Hosts that step many agents
//! against a shared world snapshot (see `npc-sim`) call
//! [`BehaviorStateMachine::advance`] directly with a [`TickContext`].
//!
//! # Cargo features
//!
//! | Feature | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `BehaviorConfig` and its parts.  |

pub mod agent;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod host;
pub mod machine;
pub mod memory;
pub mod state;


pub use agent::Agent;
pub use config::{BehaviorConfig, SearchSettings};
pub use context::TickContext;
pub use diagnostics::Diagnostics;
pub use error::{BehaviorError, BehaviorResult};
pub use event::BehaviorEvent;
pub use host::{Navigator, TargetLocator};
pub use machine::BehaviorStateMachine;
pub use memory::TargetMemory;
pub use state::BehaviorState;
