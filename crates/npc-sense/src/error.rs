use npc_core::NpcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SenseError {
    #[error("vision angle must be in (0, 360] degrees, got {0}")]
    InvalidAngle(f32),

    #[error(transparent)]
    Core(#[from] NpcError),
}

pub type SenseResult<T> = Result<T, SenseError>;
