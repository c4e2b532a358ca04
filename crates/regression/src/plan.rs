//! The fixed sequence of build and comparison steps.
//!
//! Every build target is produced before any comparison runs, and the order of
//! both lists is significant: later targets depend on artifacts of earlier ones.

use executors::actions::script::{ScriptContext, ScriptRequest};

use crate::config::RunnerConfig;

/// Removes everything a previous run generated.
pub const CLEAN_TARGET: &str = "clean.tests";

/// Build-tool targets in the order they must be built.
pub const BUILD_TARGETS: [&str; 8] = [
    CLEAN_TARGET,
    "permanent",
    "changes",
    "diff.out",
    "verbose.out",
    "overlayed",
    "brief.expected",
    "brief.out",
];

/// Where the expected side of a comparison comes from.
#[derive(Debug, Clone, Copy)]
enum Expected {
    /// Checked into the fixture directory.
    Saved(&'static str),
    /// Generated by the build in the working directory.
    Built(&'static str),
}

const COMPARISONS: [(Expected, &str); 3] = [
    (Expected::Saved("diff.saved"), "diff.out"),
    (Expected::Saved("verbose.saved"), "verbose.out"),
    (Expected::Built("brief.expected"), "brief.out"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    Build { target: String },
    Compare { expected: String, actual: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    /// Exact text handed to the shell.
    pub command: String,
}

impl Step {
    pub fn build(config: &RunnerConfig, target: &str) -> Self {
        Self {
            kind: StepKind::Build {
                target: target.to_string(),
            },
            command: format!("{} {target}", config.build_tool),
        }
    }

    pub fn compare(config: &RunnerConfig, expected: &str, actual: &str) -> Self {
        Self {
            kind: StepKind::Compare {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            command: format!("{} {expected} {actual}", config.diff_command),
        }
    }

    pub fn context(&self) -> ScriptContext {
        match &self.kind {
            StepKind::Build { target } if target == CLEAN_TARGET => ScriptContext::CleanupScript,
            StepKind::Build { .. } => ScriptContext::BuildScript,
            StepKind::Compare { .. } => ScriptContext::CompareScript,
        }
    }

    pub fn request(&self) -> ScriptRequest {
        ScriptRequest::new(self.command.clone(), self.context())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Cleanup, every build target, then the three fixture comparisons.
    pub fn standard(config: &RunnerConfig) -> Self {
        let builds = BUILD_TARGETS
            .iter()
            .map(|target| Step::build(config, target));

        let comparisons = COMPARISONS.iter().map(|(expected, actual)| {
            let expected = match expected {
                Expected::Saved(name) => config.saved_fixture(name),
                Expected::Built(name) => (*name).to_string(),
            };
            Step::compare(config, &expected, actual)
        });

        Self::new(builds.chain(comparisons).collect())
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}
