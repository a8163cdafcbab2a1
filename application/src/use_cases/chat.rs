//! Chat controller use case.
//!
//! Drives the chat view: session list, message history, and the
//! ask/stream/fallback cycle. State lives in [`ChatState`] as plain data;
//! this controller owns the I/O orchestration around it and publishes
//! every change to a [`ViewSink`] subscriber.
//!
//! # Failure tiers
//!
//! List and history loads degrade silently (the stale view is tolerated and
//! the failure is only logged). Session creation, the ask fallback, and
//! feedback submission raise an error notification through the
//! [`Notifier`] port. Malformed frames inside an answer stream are dropped
//! by the decoder without aborting the stream.

use crate::ports::backend::{KnowledgeBackend, StreamHandle};
use crate::ports::notifier::{NoNotifier, Notifier};
use crate::ports::view::{NoView, ViewEvent, ViewSink};
use kb_domain::{ChatMessage, ChatState, Feedback, Question, StreamEvent, DEFAULT_SESSION_TITLE};
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates one chat conversation view.
///
/// At most one ask is in flight per controller; the streaming flag in
/// [`ChatState`] guards re-entry. All other operations are fire-and-forget.
pub struct ChatController {
    state: ChatState,
    backend: Arc<dyn KnowledgeBackend>,
    notifier: Arc<dyn Notifier>,
    view: Arc<dyn ViewSink>,
}

impl ChatController {
    pub fn new(backend: Arc<dyn KnowledgeBackend>) -> Self {
        Self {
            state: ChatState::new(),
            backend,
            notifier: Arc::new(NoNotifier),
            view: Arc::new(NoView),
        }
    }

    /// Attach a notification sink.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Attach a view subscriber.
    pub fn with_view(mut self, view: Arc<dyn ViewSink>) -> Self {
        self.view = view;
        self
    }

    /// Read-only snapshot of the chat state.
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Reload the session list. Failures leave the current list in place.
    pub async fn load_sessions(&mut self) {
        match self.backend.list_sessions().await {
            Ok(sessions) => {
                self.state.replace_sessions(sessions.clone());
                self.view.on_event(ViewEvent::SessionsReloaded(sessions));
            }
            Err(e) => debug!("session list load failed: {}", e),
        }
    }

    /// Create a session with the default title and make it current.
    pub async fn new_session(&mut self) {
        match self.backend.create_session(DEFAULT_SESSION_TITLE).await {
            Ok(id) => {
                self.state.session_created(id);
                self.load_sessions().await;
            }
            Err(e) => {
                warn!("session creation failed: {}", e);
                self.notifier.error("Could not create a session");
            }
        }
    }

    /// Open a session and load its history. A failed history load keeps
    /// the session current with whatever messages were already shown.
    pub async fn load_session(&mut self, session_id: &str) {
        self.state.select_session(session_id);
        match self.backend.session_messages(session_id).await {
            Ok(messages) => {
                self.state.replace_messages(messages.clone());
                self.view.on_event(ViewEvent::SessionOpened {
                    id: session_id.to_string(),
                    messages,
                });
                self.scroll_to_bottom();
            }
            Err(e) => debug!("history load failed for {}: {}", session_id, e),
        }
    }

    /// Delete a session, then refresh the list. Deleting the current
    /// session empties the message view.
    pub async fn delete_session(&mut self, session_id: &str) {
        if let Err(e) = self.backend.delete_session(session_id).await {
            debug!("session delete failed for {}: {}", session_id, e);
        }
        let was_current = self.state.current_session() == Some(session_id);
        self.state.session_deleted(session_id);
        if was_current {
            self.view.on_event(ViewEvent::SessionClosed);
        }
        self.load_sessions().await;
    }

    /// Ask a question and stream the answer into the conversation.
    ///
    /// No-op on a blank question or while a stream is in progress. Lazily
    /// creates a session when none is current; if that creation fails, the
    /// ask still proceeds without a session id. Any failure of the
    /// streaming path falls back to the non-streaming endpoint.
    pub async fn ask(&mut self, question: &str) {
        if !self.state.can_ask(question) {
            return;
        }
        // can_ask guarantees a non-blank question
        let question = match Question::try_new(question) {
            Some(q) => q.into_content(),
            None => return,
        };

        if self.state.current_session().is_none() {
            self.new_session().await;
        }

        self.state.push_user_message(&question);
        self.view.on_event(ViewEvent::UserMessage(question.clone()));
        self.state.begin_stream();
        self.scroll_to_bottom();

        self.state.push_assistant_placeholder();
        self.view.on_event(ViewEvent::AnswerStarted);

        let session_id = self.state.current_session().map(str::to_string);
        let streamed = match self
            .backend
            .ask_stream(&question, session_id.as_deref())
            .await
        {
            Ok(handle) => self.consume_stream(handle).await,
            Err(e) => {
                debug!("streaming request failed: {}", e);
                false
            }
        };

        if !streamed {
            self.ask_fallback(&question).await;
        }

        self.state.finish_stream(&question);
        self.view.on_event(ViewEvent::AnswerCompleted);
        self.scroll_to_bottom();
    }

    /// Rate an assistant answer.
    pub async fn send_feedback(&self, message: &ChatMessage, rating: i8) {
        let feedback = Feedback::for_answer(
            self.state.current_session().map(str::to_string),
            &message.content,
            rating,
        );
        match self.backend.send_feedback(&feedback).await {
            Ok(()) => {
                let text = if feedback.is_positive() {
                    "Thanks for the feedback!"
                } else {
                    "Feedback saved"
                };
                self.notifier.success(text);
            }
            Err(e) => {
                debug!("feedback submission failed: {}", e);
                self.notifier.error("Could not submit feedback");
            }
        }
    }

    /// Drain a stream into the placeholder. Returns false if the transport
    /// failed and the fallback should run.
    async fn consume_stream(&mut self, mut handle: StreamHandle) -> bool {
        while let Some(event) = handle.receiver.recv().await {
            match event {
                StreamEvent::Sources(sources) => {
                    self.state.set_answer_sources(sources.clone());
                    self.view.on_event(ViewEvent::AnswerSources(sources));
                }
                StreamEvent::Delta(chunk) => {
                    self.state.append_answer_delta(&chunk);
                    self.view.on_event(ViewEvent::AnswerDelta(chunk));
                    self.scroll_to_bottom();
                }
                StreamEvent::Done => {}
                StreamEvent::Failed(e) => {
                    debug!("stream interrupted: {}", e);
                    return false;
                }
            }
        }
        true
    }

    async fn ask_fallback(&mut self, question: &str) {
        match self.backend.ask(question).await {
            Ok(answer) => {
                self.view
                    .on_event(ViewEvent::AnswerSources(answer.sources.clone()));
                self.view
                    .on_event(ViewEvent::AnswerDelta(answer.answer.clone()));
                self.state.fill_answer(answer);
            }
            Err(e) => {
                warn!("fallback ask failed: {}", e);
                self.notifier.error("Could not get an answer");
            }
        }
    }

    fn scroll_to_bottom(&self) {
        self.view.on_event(ViewEvent::ScrollToBottom);
    }
}
