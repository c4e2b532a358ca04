pub mod config;
pub mod plan;
pub mod runner;

use std::{env, io::IsTerminal};

pub use config::RunnerConfig;
pub use plan::Plan;
pub use runner::{RunOutcome, Runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    // Quiet by default: a passing run should only show what the steps print.
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(fmt_layer)
        .init();
}
