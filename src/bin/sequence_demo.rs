//! Sequences: Fibonacci expansion and gridworld neighbour enumeration.

use std::process::ExitCode;

use monadic::demo::{self, gridworld::Gridworld};
use monadic::effect::Console;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let grid = Gridworld::default();
    tracing::debug!("gridworld layout:\n{grid}");

    let mut console = Console::stdio();
    match demo::run_sequence(&mut console, &grid) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("sequence demo failed: {error}");
            ExitCode::FAILURE
        }
    }
}
