//! Effects: an interactive greeting over standard input and output.

use std::process::ExitCode;

use monadic::demo::greeting;
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

    let mut console = Console::stdio();
    match greeting::run(&mut console) {
        Ok(io) => {
            tracing::debug!("effect demo finished with {io}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("effect demo failed: {error}");
            ExitCode::FAILURE
        }
    }
}
