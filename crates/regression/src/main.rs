use anyhow::Context;
use executors::executors::shell::ShellExecutor;
use regression::{Plan, Runner, RunnerConfig, init_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = RunnerConfig::from_current_dir()?;
    let plan = Plan::standard(&config);
    let runner = Runner::new(ShellExecutor::new(&config.working_dir));

    let outcome = runner.run(&plan).await.context("test run aborted")?;
    if let Some(diagnostic) = outcome.diagnostic() {
        println!("{diagnostic}");
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}
