//! The closed set of behavior modes.

use std::fmt;

/// What the agent is doing this tick.  Exactly one is active at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    /// Walking the patrol route.  The state every agent starts in.
    Patrolling,
    /// Following the target's live position.
    Chasing,
    /// Probing around the last sighting after losing the target.
    Searching,
    /// Holding position at a waypoint.
    Waiting,
    /// Striking the target.  Lasts one tick, then back to chasing.
    Attacking,
}

impl BehaviorState {
    /// The state a freshly created agent starts in.
    pub const INITIAL: BehaviorState = BehaviorState::Patrolling;

    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorState::Patrolling => "patrolling",
            BehaviorState::Chasing    => "chasing",
            BehaviorState::Searching  => "searching",
            BehaviorState::Waiting    => "waiting",
            BehaviorState::Attacking  => "attacking",
        }
    }
}

impl Default for BehaviorState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
