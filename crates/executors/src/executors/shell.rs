use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    actions::{ExecutorAction, script::ScriptRequest},
    executors::{Executor, ExecutorError},
    exit::CommandExit,
};

/// Executes scripts as real child processes sharing this process's stdio.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    current_dir: PathBuf,
}

impl ShellExecutor {
    pub fn new(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
        }
    }
}

#[async_trait]
impl Executor for ShellExecutor {
    async fn execute(&self, request: &ScriptRequest) -> Result<CommandExit, ExecutorError> {
        let mut child = request.spawn(&self.current_dir).await?;
        let status = child
            .wait()
            .await
            .map_err(|source| ExecutorError::WaitError {
                command: request.script.clone(),
                source,
            })?;

        Ok(CommandExit::from(status))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::actions::script::ScriptContext;

    fn build(script: &str) -> ScriptRequest {
        ScriptRequest::new(script, ScriptContext::BuildScript)
    }

    #[tokio::test]
    async fn zero_exit_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());

        let exit = executor.execute(&build("true")).await.unwrap();

        assert_eq!(exit, CommandExit::Code(0));
        assert!(exit.success());
    }

    #[tokio::test]
    async fn exit_code_is_reported_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());

        let exit = executor.execute(&build("exit 42")).await.unwrap();

        assert_eq!(exit, CommandExit::Code(42));
        assert_eq!(exit.exit_code(), 42);
    }

    #[tokio::test]
    async fn shell_syntax_is_interpreted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.out"), "a").unwrap();
        std::fs::write(dir.path().join("b.out"), "b").unwrap();
        let executor = ShellExecutor::new(dir.path());

        let exit = executor
            .execute(&build("rm -f *.out && test ! -e a.out"))
            .await
            .unwrap();

        assert!(exit.success());
        assert!(!dir.path().join("b.out").exists());
    }

    #[tokio::test]
    async fn killed_child_reports_signal() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());

        let exit = executor.execute(&build("kill -9 $$")).await.unwrap();

        assert_eq!(exit, CommandExit::Signal(9));
        assert_eq!(exit.exit_code(), 247);
    }
}
