//! Incremental decoder for the `/api/ask/stream` SSE body.
//!
//! The backend emits newline-delimited frames of the form
//! `data: {"type": ...}\n`. Network reads split the body at arbitrary byte
//! boundaries, so the decoder buffers raw bytes and only ever parses
//! complete lines: everything after the last `\n` is held back until the
//! next read. The parsed event sequence is therefore independent of how
//! the reads were chunked.
//!
//! Per-frame tolerance: a line that is not `data: `-prefixed, is not valid
//! UTF-8, or does not parse as a known frame is discarded without aborting
//! the stream.

use kb_domain::{Source, StreamEvent};
use serde::Deserialize;
use tracing::trace;

/// Line prefix carrying a frame payload.
const DATA_PREFIX: &str = "data: ";

/// Wire shape of one answer frame.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum AnswerFrame {
    Sources { sources: Vec<Source> },
    Content { content: String },
    Done,
}

impl From<AnswerFrame> for StreamEvent {
    fn from(frame: AnswerFrame) -> Self {
        match frame {
            AnswerFrame::Sources { sources } => StreamEvent::Sources(sources),
            AnswerFrame::Content { content } => StreamEvent::Delta(content),
            AnswerFrame::Done => StreamEvent::Done,
        }
    }
}

/// Reassembles SSE frames from arbitrarily chunked body bytes.
#[derive(Debug, Default)]
pub struct SseFrameDecoder {
    buffer: Vec<u8>,
}

impl SseFrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk; returns the events completed by it.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            if let Some(event) = parse_line(&line[..newline]) {
                events.push(event);
            }
        }
        events
    }

    /// Bytes held back as a possibly incomplete trailing line.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }
}

fn parse_line(line: &[u8]) -> Option<StreamEvent> {
    let Ok(text) = std::str::from_utf8(line) else {
        trace!("discarding non-UTF-8 frame");
        return None;
    };
    let payload = text.strip_prefix(DATA_PREFIX)?;
    match serde_json::from_str::<AnswerFrame>(payload) {
        Ok(frame) => Some(frame.into()),
        Err(e) => {
            trace!("discarding malformed frame: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &[u8] = b"data: {\"type\": \"sources\", \"sources\": [{\"title\": \"Doc \\\"A\\\"\"}]}\n\
        data: {\"type\": \"content\", \"content\": \"Hello \"}\n\
        data: {\"type\": \"content\", \"content\": \"world\\n\"}\n\
        data: {\"type\": \"done\"}\n";

    fn decode_chunked(body: &[u8], chunk_size: usize) -> Vec<StreamEvent> {
        let mut decoder = SseFrameDecoder::new();
        let mut events = Vec::new();
        for chunk in body.chunks(chunk_size) {
            events.extend(decoder.feed(chunk));
        }
        assert!(decoder.pending().is_empty());
        events
    }

    #[test]
    fn decodes_a_whole_body() {
        let events = decode_chunked(BODY, BODY.len());
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], StreamEvent::Sources(ref s) if s.len() == 1));
        assert_eq!(events[1], StreamEvent::Delta("Hello ".to_string()));
        assert_eq!(events[2], StreamEvent::Delta("world\n".to_string()));
        assert_eq!(events[3], StreamEvent::Done);
    }

    #[test]
    fn chunking_does_not_change_the_event_sequence() {
        let whole = decode_chunked(BODY, BODY.len());
        // Every chunk size from one byte upward, covering splits mid-line,
        // mid-JSON-escape, and mid-prefix.
        for chunk_size in 1..=BODY.len() {
            assert_eq!(decode_chunked(BODY, chunk_size), whole, "chunk_size={}", chunk_size);
        }
    }

    #[test]
    fn trailing_incomplete_line_is_held_back() {
        let mut decoder = SseFrameDecoder::new();
        let events = decoder.feed(b"data: {\"type\": \"content\", \"content\": \"par");
        assert!(events.is_empty());
        assert!(!decoder.pending().is_empty());

        let events = decoder.feed(b"tial\"}\n");
        assert_eq!(events, vec![StreamEvent::Delta("partial".to_string())]);
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn malformed_frame_is_discarded_without_aborting() {
        let mut decoder = SseFrameDecoder::new();
        let body = b"data: {not json}\n\
            data: {\"type\": \"unknown\"}\n\
            data: {\"type\": \"content\", \"content\": \"ok\"}\n";
        let events = decoder.feed(body);
        assert_eq!(events, vec![StreamEvent::Delta("ok".to_string())]);
    }

    #[test]
    fn non_data_lines_are_ignored() {
        let mut decoder = SseFrameDecoder::new();
        let body = b"\n: keep-alive\nevent: ping\ndata: {\"type\": \"done\"}\n";
        let events = decoder.feed(body);
        assert_eq!(events, vec![StreamEvent::Done]);
    }

    #[test]
    fn multibyte_content_survives_byte_splits() {
        let body = "data: {\"type\": \"content\", \"content\": \"héllo wörld\"}\n".as_bytes();
        let whole = decode_chunked(body, body.len());
        assert_eq!(whole, vec![StreamEvent::Delta("héllo wörld".to_string())]);
        for chunk_size in 1..body.len() {
            assert_eq!(decode_chunked(body, chunk_size), whole);
        }
    }
}
