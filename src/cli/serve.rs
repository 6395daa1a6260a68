//! The `serve` command: run the mock event source.

use std::time::Duration;

use color_eyre::Result;

use crate::config::MockSourceConfig;
use crate::mock_source::start_mock_source;

use super::args::ServeArgs;

pub fn mock_source_config(args: &ServeArgs) -> MockSourceConfig {
    MockSourceConfig::new()
        .with_addr(args.addr)
        .with_interval(Duration::from_millis(args.interval_ms))
}

/// Serve until interrupted.
pub async fn handle_serve_command(args: ServeArgs) -> Result<()> {
    let source = start_mock_source(mock_source_config(&args)).await?;
    println!("Server listening on {}", source.addr());

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, stopping mock source");
        }
        _ = source.wait() => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[test]
    fn test_mock_source_config_from_args() {
        let args = ServeArgs {
            addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            interval_ms: 250,
        };
        let config = mock_source_config(&args);
        assert_eq!(config.addr.port(), 9090);
        assert_eq!(config.interval, Duration::from_millis(250));
    }
}
