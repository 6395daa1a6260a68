//! The `webhook` command: run the relay.

use std::time::Duration;

use color_eyre::Result;

use crate::adapters::{ConsoleReporter, ReqwestHttpClient};
use crate::config::RelayConfig;
use crate::relay::{Relay, RelaySummary};

use super::args::WebhookArgs;

/// Build the relay configuration: environment first, then flags.
pub fn relay_config(args: &WebhookArgs) -> RelayConfig {
    let mut config = RelayConfig::from_env().with_forward_url(args.tunnel.clone());

    if let Some(url) = &args.stream_url {
        config = config.with_stream_url(url.clone());
    }
    if let Some(secs) = args.timeout {
        config = config.with_forward_timeout(Duration::from_secs(secs));
    }

    config
}

/// Run the relay until the stream ends, fails, or the process is interrupted.
///
/// Interrupting drops the running session, which releases the upstream
/// connection.
pub async fn handle_webhook_command(args: WebhookArgs) -> Result<Option<RelaySummary>> {
    let config = relay_config(&args);
    tracing::debug!(?config, "Starting relay");

    let mut relay = Relay::new(&config, ReqwestHttpClient::new(), ConsoleReporter::new());

    tokio::select! {
        result = relay.run() => Ok(Some(result?)),
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, closing upstream connection");
            Ok(None)
        }
    }
}
