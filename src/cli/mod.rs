//! CLI module for hookrelay.
//!
//! - `webhook [--tunnel URL]` - relay the event stream
//! - `serve` - run the mock event source
//!
//! `--help` and `--version` come from clap.
//!
//! # Usage
//!
//! ```ignore
//! use clap::Parser;
//! use hookrelay::cli::{run_cli_command, Cli};
//!
//! let cli = Cli::parse();
//! run_cli_command(cli.command).await?;
//! ```

pub mod args;
pub mod serve;
pub mod webhook;

pub use args::{Cli, CliCommand, ServeArgs, WebhookArgs};
pub use serve::handle_serve_command;
pub use webhook::handle_webhook_command;

use color_eyre::Result;

/// Run the parsed command to completion.
pub async fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Webhook(args) => handle_webhook_command(args).await.map(|_| ()),
        CliCommand::Serve(args) => handle_serve_command(args).await,
    }
}
