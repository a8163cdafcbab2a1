//! Streaming events for answer delivery.
//!
//! [`StreamEvent`] represents individual events in a streaming answer,
//! enabling real-time display of backend output as it is generated.
//!
//! The `Sources`, `Delta`, and `Done` variants mirror the backend's SSE
//! frames. `Failed` is injected client-side by the transport when the
//! connection drops mid-stream, so the consumer can switch to the
//! non-streaming fallback.

use super::entities::Source;

/// An event in a streaming answer.
///
/// Used to bridge infrastructure-level streaming (SSE chunks from the
/// knowledge backend) to the application layer.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Citation sources for the answer being streamed. Arrives once,
    /// before the first content delta.
    Sources(Vec<Source>),
    /// A text chunk of the answer.
    Delta(String),
    /// End-of-answer marker from the backend. Carries no payload.
    Done,
    /// The transport failed mid-stream. Terminal; the stream yields
    /// nothing further.
    Failed(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta event.
    pub fn delta(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Done | StreamEvent::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_returns_content() {
        let event = StreamEvent::Delta("hello".to_string());
        assert_eq!(event.delta(), Some("hello"));
        assert!(!event.is_terminal());
    }

    #[test]
    fn sources_is_not_terminal() {
        let event = StreamEvent::Sources(vec![]);
        assert_eq!(event.delta(), None);
        assert!(!event.is_terminal());
    }

    #[test]
    fn done_and_failed_are_terminal() {
        assert!(StreamEvent::Done.is_terminal());
        assert!(StreamEvent::Failed("connection reset".to_string()).is_terminal());
    }
}
