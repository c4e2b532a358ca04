use std::path::Path;

use async_trait::async_trait;
use tokio::process::Child;

use crate::executors::ExecutorError;

pub mod script;

/// Something that can be started as a child process in a working directory.
#[async_trait]
pub trait ExecutorAction {
    async fn spawn(&self, current_dir: &Path) -> Result<Child, ExecutorError>;
}
