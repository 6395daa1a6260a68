//! SSE (Server-Sent Events) frame parsing
//!
//! Parses the textual SSE wire format coming from the upstream webhook source.
//! Only two kinds of lines matter to the relay:
//! - `data: <payload>` - an event body, passed through untouched
//! - `:<text>` - a comment
//!
//! Blank lines and other fields (`event:`, `id:`, `retry:`) are dropped.
//!
//! # Module structure
//! - `frame` - `SseFrame` and `FrameKind`
//! - `parser` - line reassembly (`FrameParser`) and `classify_line`
//! - `stream` - `frame_stream`, the lazy frame sequence over a transport

mod frame;
mod parser;
mod stream;

pub use frame::{FrameKind, SseFrame};
pub use parser::{classify_line, FrameParser};
pub use stream::{frame_stream, FrameStream};
