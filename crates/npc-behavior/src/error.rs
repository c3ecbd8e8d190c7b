use npc_core::NpcError;
use npc_planner::PlannerError;
use npc_sense::SenseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no target could be located at startup")]
    MissingTarget,

    #[error("vision: {0}")]
    Sense(#[from] SenseError),

    #[error("patrol/search: {0}")]
    Planner(#[from] PlannerError),

    #[error(transparent)]
    Core(#[from] NpcError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
