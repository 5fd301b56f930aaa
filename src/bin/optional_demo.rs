//! Optional values: partial numeric functions and a mock wallet service.

use std::process::ExitCode;

use monadic::demo::{self, wallet::WalletDirectory};
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
    match demo::run_optional(&mut console, &WalletDirectory::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("optional demo failed: {error}");
            ExitCode::FAILURE
        }
    }
}
