use thiserror::Error;

use wb_agent::AgentError;
use wb_core::{AgentId, CoreError};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("agent spawn failed: {0}")]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
