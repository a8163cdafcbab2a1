//! View events emitted by the chat controller for presentation rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The controller mutates [`ChatState`](kb_domain::ChatState)
//! first, then publishes the change here; the view renders from the events
//! (and may read the state snapshot) without ever driving the transition
//! logic itself.

use kb_domain::{ChatMessage, ChatSession, Source};

/// Events emitted by the chat controller for the view to render
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The session list was reloaded from the backend.
    SessionsReloaded(Vec<ChatSession>),
    /// A session became current and its history was loaded.
    SessionOpened {
        id: String,
        messages: Vec<ChatMessage>,
    },
    /// The current session went away (deleted).
    SessionClosed,
    /// The user's question was appended to the conversation.
    UserMessage(String),
    /// An answer stream started; an empty assistant message is in place.
    AnswerStarted,
    /// Citation sources for the in-flight answer.
    AnswerSources(Vec<Source>),
    /// A text chunk of the in-flight answer.
    AnswerDelta(String),
    /// The ask cycle ended (streamed or via fallback).
    AnswerCompleted,
    /// The message view should pin itself to the newest message on its
    /// next render pass.
    ScrollToBottom,
}

/// Subscriber for view events.
pub trait ViewSink: Send + Sync {
    fn on_event(&self, event: ViewEvent);
}

/// Null object: discards every event.
pub struct NoView;

impl ViewSink for NoView {
    fn on_event(&self, _event: ViewEvent) {}
}
