use async_trait::async_trait;
use thiserror::Error;

use crate::{actions::script::ScriptRequest, exit::CommandExit};

pub mod shell;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error(transparent)]
    SpawnError(#[from] std::io::Error),
    #[error("failed waiting for `{command}`: {source}")]
    WaitError {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs one script to completion and reports how it exited.
///
/// Implementations must not return before the child has terminated; the
/// runner relies on this to guarantee that no two steps overlap.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, request: &ScriptRequest) -> Result<CommandExit, ExecutorError>;
}
