//! Chat view state and its transition functions.
//!
//! The state is plain data; every mutation is a synchronous transition with
//! no I/O, so the `idle → streaming → idle` ask cycle can be tested without
//! a backend or a view. The application layer drives these transitions and
//! forwards the resulting changes to its view subscriber.

use crate::session::entities::{ChatMessage, ChatSession, Role, Source};
use crate::session::response::Answer;
use crate::session::title::{derive_title, is_default_title};

/// In-memory chat state for one controller instance.
///
/// At most one answer stream is in flight at a time; [`can_ask`](Self::can_ask)
/// is the guard and [`begin_stream`](Self::begin_stream) /
/// [`finish_stream`](Self::finish_stream) bracket the cycle.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    sessions: Vec<ChatSession>,
    current_session: Option<String>,
    messages: Vec<ChatMessage>,
    streaming: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn current_session(&self) -> Option<&str> {
        self.current_session.as_deref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// The most recent assistant message, if any.
    pub fn last_answer(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.role == Role::Assistant)
    }

    /// Replace the session list with a fresh load from the backend.
    pub fn replace_sessions(&mut self, sessions: Vec<ChatSession>) {
        self.sessions = sessions;
    }

    /// A session was created on the backend: make it current and start
    /// with an empty history.
    pub fn session_created(&mut self, id: impl Into<String>) {
        self.current_session = Some(id.into());
        self.messages.clear();
    }

    /// Make an existing session current. The message history is replaced
    /// separately once (and if) it loads.
    pub fn select_session(&mut self, id: impl Into<String>) {
        self.current_session = Some(id.into());
    }

    /// Replace the message history with a fresh load from the backend.
    pub fn replace_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    /// A session was deleted: if it was current, the view empties.
    pub fn session_deleted(&mut self, id: &str) {
        if self.current_session.as_deref() == Some(id) {
            self.current_session = None;
            self.messages.clear();
        }
    }

    /// An ask may start only with a non-blank question and no stream in
    /// progress.
    pub fn can_ask(&self, question: &str) -> bool {
        !question.trim().is_empty() && !self.streaming
    }

    pub fn push_user_message(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn begin_stream(&mut self) {
        self.streaming = true;
    }

    /// Append the empty assistant message that the stream writes into.
    pub fn push_assistant_placeholder(&mut self) {
        self.messages.push(ChatMessage::assistant_placeholder());
    }

    /// Replace the in-flight answer's source list.
    pub fn set_answer_sources(&mut self, sources: Vec<Source>) {
        if let Some(msg) = self.answer_target() {
            msg.sources = sources;
        }
    }

    /// Append a content delta to the in-flight answer.
    pub fn append_answer_delta(&mut self, chunk: &str) {
        if let Some(msg) = self.answer_target() {
            msg.content.push_str(chunk);
        }
    }

    /// Fill the answer from a single non-streaming payload.
    ///
    /// Overwrites the placeholder when it is still the last message;
    /// otherwise appends a new assistant message.
    pub fn fill_answer(&mut self, answer: Answer) {
        match self.answer_target() {
            Some(msg) => {
                msg.content = answer.answer;
                msg.sources = answer.sources;
            }
            None => {
                let mut msg = ChatMessage::assistant(answer.answer);
                msg.sources = answer.sources;
                self.messages.push(msg);
            }
        }
    }

    /// End the ask cycle: clear the streaming flag and, if the current
    /// session still carries the creation-time placeholder title, name it
    /// after the question.
    pub fn finish_stream(&mut self, question: &str) {
        self.streaming = false;
        if let Some(id) = self.current_session.as_deref() {
            if let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) {
                if is_default_title(&session.title) {
                    session.title = derive_title(question);
                }
            }
        }
    }

    fn answer_target(&mut self) -> Option<&mut ChatMessage> {
        self.messages.last_mut().filter(|m| m.role == Role::Assistant)
    }
}
