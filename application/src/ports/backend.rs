//! Knowledge backend port
//!
//! Defines the interface for communicating with the knowledge-base backend.

use async_trait::async_trait;
use kb_domain::{Answer, ChatMessage, ChatSession, DashboardStats, Feedback, GraphData, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during backend operations
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),
}

/// Handle for receiving events of a streaming answer.
///
/// Wraps an `mpsc::Receiver<StreamEvent>`. The transport feeds the channel
/// from a background reader task; the stream ends when the channel closes.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect the full answer.
    ///
    /// Useful when streaming display is not needed (e.g. machine-readable
    /// one-shot output) but the streaming endpoint is still preferred.
    pub async fn collect_answer(mut self) -> Result<Answer, BackendError> {
        let mut answer = Answer::new("", Vec::new());
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Sources(sources) => answer.sources = sources,
                StreamEvent::Delta(chunk) => answer.answer.push_str(&chunk),
                StreamEvent::Done => {}
                StreamEvent::Failed(e) => {
                    return Err(BackendError::StreamInterrupted(e));
                }
            }
        }
        Ok(answer)
    }
}

/// Gateway to the knowledge-base backend.
///
/// This port defines how the application layer talks to the backend.
/// The HTTP/SSE adapter lives in the infrastructure layer.
#[async_trait]
pub trait KnowledgeBackend: Send + Sync {
    /// List all chat sessions.
    async fn list_sessions(&self) -> Result<Vec<ChatSession>, BackendError>;

    /// Create a session with the given title; returns its id.
    async fn create_session(&self, title: &str) -> Result<String, BackendError>;

    /// Load the message history of a session.
    async fn session_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, BackendError>;

    /// Delete a session.
    async fn delete_session(&self, session_id: &str) -> Result<(), BackendError>;

    /// Ask a question and stream the answer.
    async fn ask_stream(
        &self,
        question: &str,
        session_id: Option<&str>,
    ) -> Result<StreamHandle, BackendError>;

    /// Ask a question on the legacy non-streaming endpoint (fallback path).
    async fn ask(&self, question: &str) -> Result<Answer, BackendError>;

    /// Submit an answer rating.
    async fn send_feedback(&self, feedback: &Feedback) -> Result<(), BackendError>;

    /// Corpus-wide dashboard counters.
    async fn stats(&self) -> Result<DashboardStats, BackendError>;

    /// Graph neighborhood of an entity.
    async fn entity_neighborhood(&self, entity: &str) -> Result<GraphData, BackendError>;

    /// Entity graph of a single document.
    async fn document_graph(&self, doc_id: &str) -> Result<GraphData, BackendError>;
}
