//! `npc-sense` - line-of-sight perception for the npc sentry controller.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                          |
//! |------------|-------------------------------------------------------------------|
//! | [`query`]  | `WorldQuery` trait (first-hit raycast) and `RayHit`               |
//! | [`vision`] | `VisionSensor` - range + cone + occlusion test; `VisionCone`      |
//! | [`error`]  | `SenseError`, `SenseResult<T>`                                    |
//!
//! # Perception model
//!
//! A target is perceived when all of the following hold:
//!
//! 1. It is no farther than `range` from the agent.
//! 2. The angle between the agent's forward vector and the direction to the
//!    target is strictly below half the cone angle (a 360° cone skips this).
//! 3. Either the target stands exactly where it was last sighted, or a ray
//!    cast from the agent toward it reports the target as the first hit.
//!
//! The sensor holds no per-tick state.  The caller owns the last sighting and
//! must refresh it every time `can_perceive` returns `true`.

pub mod error;
pub mod query;
pub mod vision;

#[cfg(test)]
mod tests;

pub use error::{SenseError, SenseResult};
pub use query::{RayHit, WorldQuery};
pub use vision::{VisionCone, VisionSensor};
