use npc_core::NpcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("patrol route has no waypoints")]
    EmptyRoute,

    #[error(transparent)]
    Core(#[from] NpcError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
