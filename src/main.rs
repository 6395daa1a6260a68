use std::io;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hookrelay::cli::{run_cli_command, Cli};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "hookrelay=debug"
    } else {
        "hookrelay=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting hookrelay");

    if let Err(e) = run_cli_command(cli.command).await {
        tracing::error!("Fatal: {:#}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
