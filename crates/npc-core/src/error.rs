//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `NpcError` as one
//! variant via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The base error type for `npc-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum NpcError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `npc-core`.
pub type NpcResult<T> = Result<T, NpcError>;

/// Fail with [`NpcError::Config`] unless `value` is finite and `>= 0`.
pub fn ensure_non_negative(field: &str, value: f32) -> NpcResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NpcError::Config(format!("{field} must be finite and >= 0, got {value}")))
    }
}

/// Fail with [`NpcError::Config`] unless `value` is finite and `> 0`.
pub fn ensure_positive(field: &str, value: f32) -> NpcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NpcError::Config(format!("{field} must be finite and > 0, got {value}")))
    }
}
