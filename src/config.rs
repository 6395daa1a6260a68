//! Relay and mock-source configuration.
//!
//! Both configs use the builder pattern. Environment variables provide
//! defaults; command-line flags override them.
//!
//! # Example
//!
//! ```
//! use hookrelay::config::RelayConfig;
//! use std::time::Duration;
//!
//! let config = RelayConfig::default()
//!     .with_forward_url(Some("http://localhost:3000/webhook".to_string()))
//!     .with_forward_timeout(Duration::from_secs(5));
//! assert_eq!(config.forward_url.as_deref(), Some("http://localhost:3000/webhook"));
//! ```

use std::net::SocketAddr;
use std::time::Duration;

/// Upstream endpoint used when nothing else is configured.
pub const DEFAULT_STREAM_URL: &str = "http://localhost:8080/stream";

/// Default bound on a single forward.
pub const DEFAULT_FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the upstream stream URL.
pub const STREAM_URL_ENV: &str = "HOOKRELAY_STREAM_URL";

/// Environment variable overriding the forward timeout, in seconds.
pub const FORWARD_TIMEOUT_ENV: &str = "HOOKRELAY_FORWARD_TIMEOUT_SECS";

/// Configuration for one relay invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Event-stream endpoint to connect to
    pub stream_url: String,
    /// Where to POST data payloads; `None` prints them instead
    pub forward_url: Option<String>,
    /// Upper bound on each forward before it counts as a delivery failure
    pub forward_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            stream_url: DEFAULT_STREAM_URL.to_string(),
            forward_url: None,
            forward_timeout: DEFAULT_FORWARD_TIMEOUT,
        }
    }
}

impl RelayConfig {
    /// Create a new RelayConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upstream stream URL.
    pub fn with_stream_url(mut self, url: impl Into<String>) -> Self {
        self.stream_url = url.into();
        self
    }

    /// Set the forwarding target. An empty string counts as no target.
    pub fn with_forward_url(mut self, url: Option<String>) -> Self {
        self.forward_url = url.filter(|u| !u.trim().is_empty());
        self
    }

    /// Set the forward timeout.
    pub fn with_forward_timeout(mut self, timeout: Duration) -> Self {
        self.forward_timeout = timeout;
        self
    }

    /// Create config from the `HOOKRELAY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(STREAM_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.stream_url = url;
        }

        if let Some(raw) = lookup(FORWARD_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.forward_timeout = Duration::from_secs(secs),
                Err(_) => tracing::warn!(
                    value = %raw,
                    "Ignoring invalid {}", FORWARD_TIMEOUT_ENV
                ),
            }
        }

        config
    }
}

/// Configuration for the mock event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSourceConfig {
    /// Address to listen on (port 0 picks a free port)
    pub addr: SocketAddr,
    /// Pause after each emitted event
    pub interval: Duration,
}

impl Default for MockSourceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            interval: Duration::from_secs(1),
        }
    }
}

impl MockSourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.stream_url, "http://localhost:8080/stream");
        assert_eq!(config.forward_url, None);
        assert_eq!(config.forward_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_empty_forward_url_is_none() {
        let config = RelayConfig::new().with_forward_url(Some(String::new()));
        assert_eq!(config.forward_url, None);

        let config = RelayConfig::new().with_forward_url(Some("  ".to_string()));
        assert_eq!(config.forward_url, None);
    }

    #[test]
    fn test_builder_chain() {
        let config = RelayConfig::new()
            .with_stream_url("http://example.test/events")
            .with_forward_url(Some("http://localhost:3000".to_string()))
            .with_forward_timeout(Duration::from_millis(500));

        assert_eq!(config.stream_url, "http://example.test/events");
        assert_eq!(config.forward_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.forward_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = RelayConfig::from_lookup(lookup(&[
            (STREAM_URL_ENV, "http://remote.test/stream"),
            (FORWARD_TIMEOUT_ENV, "3"),
        ]));
        assert_eq!(config.stream_url, "http://remote.test/stream");
        assert_eq!(config.forward_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_from_lookup_ignores_invalid_timeout() {
        let config = RelayConfig::from_lookup(lookup(&[(FORWARD_TIMEOUT_ENV, "soon")]));
        assert_eq!(config.forward_timeout, DEFAULT_FORWARD_TIMEOUT);
    }

    #[test]
    fn test_mock_source_defaults() {
        let config = MockSourceConfig::default();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.interval, Duration::from_secs(1));
    }
}
