//! SSE frame types.

/// Classification of one complete SSE line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// A `data: ` line carrying an event body
    Data,
    /// A `:` comment line
    Comment,
    /// The transport ended cleanly
    End,
}

/// One classified frame read from the upstream stream.
///
/// For `Data` the payload is the event body exactly as received (the relay
/// never parses it). For `Comment` it is the text after the `:` marker. `End`
/// carries an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    pub kind: FrameKind,
    pub payload: String,
}

impl SseFrame {
    pub fn data(payload: impl Into<String>) -> Self {
        Self {
            kind: FrameKind::Data,
            payload: payload.into(),
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            kind: FrameKind::Comment,
            payload: text.into(),
        }
    }

    pub fn end() -> Self {
        Self {
            kind: FrameKind::End,
            payload: String::new(),
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == FrameKind::End
    }
}
