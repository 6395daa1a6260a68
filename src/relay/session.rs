//! One open upstream connection.

use futures_util::StreamExt;

use crate::error::StreamError;
use crate::sse::{frame_stream, FrameStream, SseFrame};
use crate::traits::ByteStream;

/// Lifecycle of a [`StreamSession`]. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed,
}

/// Owns the live transport and the parser reading it.
///
/// The transport is released exactly once: when an `End` frame or a read
/// error is pulled, on an explicit [`close`](Self::close), or when the
/// session is dropped (including when the task driving it is cancelled).
pub struct StreamSession {
    frames: Option<FrameStream>,
    state: SessionState,
}

impl StreamSession {
    pub fn new(transport: ByteStream) -> Self {
        Self {
            frames: Some(frame_stream(transport)),
            state: SessionState::Open,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Pull the next frame, reading from the transport as needed.
    ///
    /// Returns `None` once the session is closed.
    pub async fn next_frame(&mut self) -> Option<Result<SseFrame, StreamError>> {
        let frames = self.frames.as_mut()?;
        let next = frames.next().await;

        let terminal = match &next {
            Some(Ok(frame)) => frame.is_end(),
            Some(Err(_)) | None => true,
        };
        if terminal {
            self.close();
        }

        next
    }

    /// Release the transport. Later calls do nothing.
    pub fn close(&mut self) {
        if self.frames.take().is_some() {
            self.state = SessionState::Closed;
            tracing::debug!("Upstream transport released");
        }
    }
}

impl Drop for StreamSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for StreamSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
