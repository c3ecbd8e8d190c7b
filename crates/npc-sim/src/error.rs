use npc_behavior::BehaviorError;
use npc_core::NpcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("agent setup failed: {0}")]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Core(#[from] NpcError),
}

pub type SimResult<T> = Result<T, SimError>;
