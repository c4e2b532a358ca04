use std::{env, path::PathBuf};

use thiserror::Error;

// Build tool invoked once per target
const BUILD_TOOL: &str = "ninja";
// Unified output so a mismatch shows the differing lines with context
const DIFF_COMMAND: &str = "diff -u";
// Saved known-good outputs, relative to the build directory
const FIXTURE_DIR: &str = "../test_cases";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub build_tool: String,
    pub diff_command: String,
    pub fixture_dir: String,
    pub working_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl RunnerConfig {
    /// The fixed configuration, rooted at the process's working directory.
    pub fn from_current_dir() -> Result<Self, ConfigError> {
        let working_dir = env::current_dir().map_err(ConfigError::CurrentDir)?;
        Ok(Self::in_dir(working_dir))
    }

    pub fn in_dir(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_tool: BUILD_TOOL.to_string(),
            diff_command: DIFF_COMMAND.to_string(),
            fixture_dir: FIXTURE_DIR.to_string(),
            working_dir: working_dir.into(),
        }
    }

    /// Path of a saved fixture as it appears on the diff command line.
    pub fn saved_fixture(&self, name: &str) -> String {
        format!("{}/{name}", self.fixture_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_hardcoded() {
        let config = RunnerConfig::in_dir("/tmp/build");

        assert_eq!(config.build_tool, "ninja");
        assert_eq!(config.diff_command, "diff -u");
        assert_eq!(config.working_dir, PathBuf::from("/tmp/build"));
    }

    #[test]
    fn saved_fixtures_live_one_directory_up() {
        let config = RunnerConfig::in_dir(".");
        assert_eq!(config.saved_fixture("diff.saved"), "../test_cases/diff.saved");
    }

    #[test]
    fn from_current_dir_uses_process_cwd() {
        let config = RunnerConfig::from_current_dir().unwrap();
        assert_eq!(config.working_dir, env::current_dir().unwrap());
    }
}
