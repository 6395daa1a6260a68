//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - streaming GET to the event source, POST to the target
//! - [`Reporter`] - operator console output

pub mod http;
pub mod reporter;

pub use http::{ByteStream, Headers, HttpClient, Response, StreamResponse};
pub use reporter::{Report, Reporter};
