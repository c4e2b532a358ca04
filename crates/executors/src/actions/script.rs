use std::{fmt, path::Path, process::Stdio};

use async_trait::async_trait;
use tokio::process::{Child, Command};
use utils::shell::get_shell_command;

use crate::{actions::ExecutorAction, executors::ExecutorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptContext {
    /// Removes artifacts left by a previous run.
    CleanupScript,
    /// Produces one build-tool target.
    BuildScript,
    /// Compares a saved fixture against freshly generated output.
    CompareScript,
}

impl fmt::Display for ScriptContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptContext::CleanupScript => "cleanup",
            ScriptContext::BuildScript => "build",
            ScriptContext::CompareScript => "compare",
        };
        f.write_str(name)
    }
}

/// A command string handed verbatim to the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRequest {
    pub script: String,
    pub context: ScriptContext,
}

impl ScriptRequest {
    pub fn new(script: impl Into<String>, context: ScriptContext) -> Self {
        Self {
            script: script.into(),
            context,
        }
    }
}

#[async_trait]
impl ExecutorAction for ScriptRequest {
    async fn spawn(&self, current_dir: &Path) -> Result<Child, ExecutorError> {
        let (shell_cmd, shell_arg) = get_shell_command();
        tracing::debug!(shell = shell_cmd, script = %self.script, "Spawning script");

        let mut command = Command::new(shell_cmd);
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .arg(shell_arg)
            .current_dir(current_dir);

        // cmd.exe does its own parsing of the command line, so the script must
        // reach it unquoted.
        #[cfg(windows)]
        command.raw_arg(&self.script);
        #[cfg(not(windows))]
        command.arg(&self.script);

        let child = command.spawn()?;

        Ok(child)
    }
}
