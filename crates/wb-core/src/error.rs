//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Runtime policy
//! no-ops (duplicate turn starts, full cargo stacks) are deliberately *not*
//! errors — only construction-time misconfiguration and unknown references
//! are.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `wb-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("countdown limit must be positive and finite, got {0}")]
    InvalidLimit(f32),

    #[error("arena half-extents must be positive and finite, got ({0}, {1})")]
    InvalidArena(f32, f32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wb-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
