//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`RecordingReporter`] - reporter that keeps every report in memory

pub mod http;
pub mod reporter;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use reporter::RecordingReporter;
