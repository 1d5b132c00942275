//! dap - run a bundled docker application

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dap_cli::cli::Cli;

/// Environment variable holding the log filter, `RUST_LOG` syntax.
const LOG_ENV: &str = "DAP_LOG";

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

/// Log to stdout, `warn` and above unless `DAP_LOG` says otherwise.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .init();
}
