//! Command-line argument definitions.

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

/// Relay webhook notifications from an event stream to a local endpoint.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "hookrelay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Parsed CLI command to execute.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Manages various functions of a webhook
    Webhook(WebhookArgs),
    /// Run the mock event source
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookArgs {
    /// The locally hosted URL (http://localhost:PORT) to forward webhook messages to
    #[arg(long, value_name = "URL")]
    pub tunnel: Option<String>,

    /// Event stream to connect to [default: http://localhost:8080/stream]
    #[arg(long, value_name = "URL")]
    pub stream_url: Option<String>,

    /// Seconds to wait for each forward before reporting a failure [default: 10]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Pause between events, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub interval_ms: u64,
}
