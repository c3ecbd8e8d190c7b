//! `npc-planner` - where an agent should walk next while patrolling or
//! searching.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`patrol`] | `PatrolRoute` (area or waypoints), `PatrolPlanner`              |
//! | [`search`] | `SearchPlanner` - points around the last known target position  |
//! | [`error`]  | `PlannerError`, `PlannerResult<T>`                              |
//!
//! Planners never talk to the navigator.  They hand a point back to the
//! behavior machine, which decides when a new point is needed (usually when
//! the navigator reports arrival).

pub mod error;
pub mod patrol;
pub mod search;


pub use error::{PlannerError, PlannerResult};
pub use patrol::{PatrolPlanner, PatrolRoute};
pub use search::SearchPlanner;
