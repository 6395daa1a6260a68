//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ConsoleReporter`] - operator reports on stdout/stderr
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::RecordingReporter`] - Captured reports

pub mod console;
pub mod mock;
pub mod reqwest_http;

pub use console::ConsoleReporter;
pub use mock::{MockHttpClient, RecordingReporter};
pub use reqwest_http::ReqwestHttpClient;
