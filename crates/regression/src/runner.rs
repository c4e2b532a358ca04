//! Fail-fast execution of a [`Plan`].
//!
//! Steps run strictly one after another. The first step whose command does not
//! exit with code zero ends the run; nothing after it is started and nothing
//! before it is retried.

use std::time::Instant;

use executors::{
    executors::{Executor, ExecutorError},
    exit::CommandExit,
};
use thiserror::Error;

use crate::plan::{Plan, StepKind};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("could not run `{command}`")]
    Executor {
        command: String,
        #[source]
        source: ExecutorError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success {
        steps_run: usize,
    },
    Failed {
        command: String,
        exit: CommandExit,
        steps_run: usize,
    },
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success { .. } => 0,
            RunOutcome::Failed { exit, .. } => exit.exit_code(),
        }
    }

    pub fn steps_run(&self) -> usize {
        match self {
            RunOutcome::Success { steps_run } | RunOutcome::Failed { steps_run, .. } => *steps_run,
        }
    }

    /// The single line printed when a run fails.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            RunOutcome::Success { .. } => None,
            RunOutcome::Failed { command, exit, .. } => {
                Some(format!("Command '{command}' failed with {exit}"))
            }
        }
    }
}

pub struct Runner<E> {
    executor: E,
}

impl<E: Executor> Runner<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn run(&self, plan: &Plan) -> Result<RunOutcome, RunnerError> {
        for (index, step) in plan.steps().iter().enumerate() {
            let started = Instant::now();
            match &step.kind {
                StepKind::Build { target } => {
                    tracing::info!(step = index, context = %step.context(), %target, "Building target")
                }
                StepKind::Compare { expected, actual } => {
                    tracing::info!(step = index, %expected, %actual, "Comparing output")
                }
            }

            let exit = self
                .executor
                .execute(&step.request())
                .await
                .map_err(|source| RunnerError::Executor {
                    command: step.command.clone(),
                    source,
                })?;

            if !exit.success() {
                // The diagnostic line printed by the caller is the only default output.
                tracing::info!(step = index, command = %step.command, %exit, "Step failed");
                return Ok(RunOutcome::Failed {
                    command: step.command.clone(),
                    exit,
                    steps_run: index + 1,
                });
            }

            tracing::info!(
                step = index,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Step finished"
            );
        }

        Ok(RunOutcome::Success {
            steps_run: plan.len(),
        })
    }
}
