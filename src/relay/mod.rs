//! The streaming relay.
//!
//! A [`Relay`] opens one long-lived request to the event source, wraps the
//! response body in a [`StreamSession`], and hands each frame to a
//! [`Forwarder`], which either POSTs it to the [`RelayTarget`] or reports it
//! on the console. Frames are handled strictly one at a time.
//!
//! ```text
//! Idle -> Connecting -> Streaming -> Closed
//!              \______________________/
//!               (request error, non-200)
//! ```

mod connection;
mod forwarder;
mod session;
mod target;

pub use connection::{ConnectionState, Relay, RelaySummary, EVENT_STREAM};
pub use forwarder::{Forwarder, FrameOutcome};
pub use session::{SessionState, StreamSession};
pub use target::RelayTarget;
