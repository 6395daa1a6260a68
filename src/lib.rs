//! hookrelay - relay webhook notifications from an event stream
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod mock_source;
pub mod relay;
pub mod sse;
pub mod traits;
