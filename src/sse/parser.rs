//! Line reassembly and classification.
//!
//! The upstream body arrives in arbitrary chunks. [`FrameParser`] keeps the
//! bytes of an unfinished line across calls and only classifies a line once
//! its terminating `\n` has been seen.

use bytes::{Buf, BytesMut};

use super::frame::SseFrame;

const DATA_PREFIX: &str = "data: ";
const COMMENT_PREFIX: char = ':';

/// Classify a single line (without its terminating newline).
///
/// Leading and trailing whitespace is trimmed first. Returns `None` for blank
/// lines and for any field this relay does not act on (`event:`, `id:`,
/// `retry:`, or anything unrecognized).
pub fn classify_line(line: &str) -> Option<SseFrame> {
    let line = line.trim();

    if let Some(payload) = line.strip_prefix(DATA_PREFIX) {
        return Some(SseFrame::data(payload));
    }

    if let Some(text) = line.strip_prefix(COMMENT_PREFIX) {
        return Some(SseFrame::comment(text));
    }

    None
}

/// Stateful parser turning byte chunks into frames.
#[derive(Debug, Default)]
pub struct FrameParser {
    /// Bytes of the line currently being assembled
    buffer: BytesMut,
    /// Prefix of `buffer` already known to hold no newline
    scanned: usize,
}

impl FrameParser {
    /// Create a new parser with an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return the frames for every line it completes.
    ///
    /// A chunk without a newline yields nothing; its bytes wait for the rest
    /// of the line.
    pub fn push_bytes(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        loop {
            let Some(offset) = self.buffer[self.scanned..].iter().position(|&b| b == b'\n')
            else {
                self.scanned = self.buffer.len();
                break;
            };
            let line = self.buffer.split_to(self.scanned + offset);
            self.buffer.advance(1);
            self.scanned = 0;

            let text = String::from_utf8_lossy(&line);
            match classify_line(&text) {
                Some(frame) => frames.push(frame),
                None if !text.trim().is_empty() => {
                    tracing::debug!(line = %text.trim(), "Ignoring unrecognized SSE line");
                }
                None => {}
            }
        }
        frames
    }

    /// Number of bytes waiting for a newline.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Signal end-of-stream.
    ///
    /// Any unterminated trailing bytes are discarded, since a frame is only
    /// produced for a complete line.
    pub fn finish(&mut self) -> SseFrame {
        if !self.buffer.is_empty() {
            tracing::debug!(
                bytes = self.buffer.len(),
                "Discarding unterminated line at end of stream"
            );
            self.buffer.clear();
        }
        self.scanned = 0;
        SseFrame::end()
    }
}
