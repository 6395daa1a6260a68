//! Lazy frame sequence over a byte transport.

use std::collections::VecDeque;
use std::pin::Pin;

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;

use super::frame::SseFrame;
use super::parser::FrameParser;
use crate::error::StreamError;
use crate::traits::ByteStream;

/// Boxed stream of frames produced by [`frame_stream`].
pub type FrameStream = Pin<Box<dyn Stream<Item = Result<SseFrame, StreamError>> + Send>>;

struct FrameState {
    transport: ByteStream,
    parser: FrameParser,
    ready: VecDeque<SseFrame>,
    finished: bool,
}

/// Turn a byte transport into a finite stream of frames.
///
/// Bytes are pulled from `transport` only when no complete frame is ready.
/// A clean end of the transport yields exactly one `End` frame; a read error
/// yields one `Err` and no `End`. The stream is fused: nothing is produced
/// after either.
pub fn frame_stream(transport: ByteStream) -> FrameStream {
    let state = FrameState {
        transport,
        parser: FrameParser::new(),
        ready: VecDeque::new(),
        finished: false,
    };

    let frames = stream::unfold(state, |mut state| async move {
        loop {
            if let Some(frame) = state.ready.pop_front() {
                return Some((Ok(frame), state));
            }

            if state.finished {
                return None;
            }

            match state.transport.next().await {
                Some(Ok(chunk)) => {
                    state.ready.extend(state.parser.push_bytes(&chunk));
                }
                Some(Err(e)) => {
                    state.finished = true;
                    let err = StreamError::ReadFailed {
                        message: e.to_string(),
                    };
                    return Some((Err(err), state));
                }
                None => {
                    state.finished = true;
                    return Some((Ok(state.parser.finish()), state));
                }
            }
        }
    });

    Box::pin(frames.fuse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::sse::FrameKind;
    use bytes::Bytes;

    fn transport(chunks: Vec<Result<&'static str, NetworkError>>) -> ByteStream {
        Box::pin(stream::iter(
            chunks
                .into_iter()
                .map(|c| c.map(Bytes::from))
                .collect::<Vec<_>>(),
        ))
    }

    #[tokio::test]
    async fn test_clean_end_yields_data_then_end() {
        let frames: Vec<_> = frame_stream(transport(vec![
            Ok("data: 1\n"),
            Ok("data: 2\n"),
            Ok("data: 3\n"),
        ]))
        .collect()
        .await;

        let kinds: Vec<_> = frames
            .into_iter()
            .map(|f| f.map(|f| f.kind))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            kinds,
            vec![
                FrameKind::Data,
                FrameKind::Data,
                FrameKind::Data,
                FrameKind::End
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_transport_yields_only_end() {
        let frames: Vec<_> = frame_stream(transport(vec![])).collect().await;
        assert_eq!(frames, vec![Ok(SseFrame::end())]);
    }

    #[tokio::test]
    async fn test_read_error_yields_no_end() {
        let frames: Vec<_> = frame_stream(transport(vec![
            Ok("data: before\n"),
            Err(NetworkError::Other {
                message: "connection reset".to_string(),
            }),
            Ok("data: after\n"),
        ]))
        .collect()
        .await;

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], Ok(SseFrame::data("before")));
        assert!(matches!(frames[1], Err(StreamError::ReadFailed { .. })));
    }

    #[tokio::test]
    async fn test_frames_from_one_chunk_are_all_delivered() {
        let frames: Vec<_> = frame_stream(transport(vec![Ok(
            "data: a\ndata: b\n:Stream finished.\n",
        )]))
        .collect()
        .await;

        assert_eq!(
            frames,
            vec![
                Ok(SseFrame::data("a")),
                Ok(SseFrame::data("b")),
                Ok(SseFrame::comment("Stream finished.")),
                Ok(SseFrame::end()),
            ]
        );
    }

    #[tokio::test]
    async fn test_nothing_after_end() {
        let mut frames = frame_stream(transport(vec![Ok("data: x\n")]));
        assert_eq!(frames.next().await, Some(Ok(SseFrame::data("x"))));
        assert_eq!(frames.next().await, Some(Ok(SseFrame::end())));
        assert_eq!(frames.next().await, None);
        assert_eq!(frames.next().await, None);
    }
}
