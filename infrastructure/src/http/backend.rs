//! HTTP implementation of the [`KnowledgeBackend`] port.
//!
//! Endpoint contracts are backend-owned and fixed:
//!
//! - `GET  /api/chat/sessions` → `{"sessions": [...]}`
//! - `POST /api/chat/sessions` → `{"id": "..."}`
//! - `GET  /api/chat/sessions/{id}/messages` → `{"messages": [...]}`
//! - `DELETE /api/chat/sessions/{id}`
//! - `POST /api/ask/stream` → SSE body (see [`sse`](super::sse))
//! - `POST /ask` → `{"answer": "...", "sources": [...]}` (fallback)
//! - `POST /api/feedback`
//! - `GET  /stats`, `GET /api/graph/...` (dashboard and graph views)

use super::client::ApiClient;
use super::sse::SseFrameDecoder;
use async_trait::async_trait;
use futures::StreamExt;
use kb_application::{BackendError, KnowledgeBackend, StreamHandle};
use kb_domain::{Answer, ChatMessage, ChatSession, DashboardStats, Feedback, GraphData, StreamEvent};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

/// Buffered events between the reader task and the consumer.
const STREAM_CHANNEL_CAPACITY: usize = 32;

/// The knowledge backend reached over HTTP/SSE.
pub struct HttpKnowledgeBackend {
    client: ApiClient,
}

impl HttpKnowledgeBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

// ==================== Wire DTOs ====================

#[derive(Debug, Deserialize)]
struct SessionListResponse {
    sessions: Vec<ChatSession>,
}

#[derive(Debug, Serialize)]
struct CreateSessionRequest<'a> {
    title: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateSessionResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct AskStreamRequest<'a> {
    question: &'a str,
    session_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

// ==================== Helpers ====================

fn request_error(e: reqwest::Error) -> BackendError {
    BackendError::RequestFailed(e.to_string())
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::UnexpectedStatus(status.as_u16()))
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    check_status(response)?
        .json::<T>()
        .await
        .map_err(|e| BackendError::InvalidBody(e.to_string()))
}

#[async_trait]
impl KnowledgeBackend for HttpKnowledgeBackend {
    async fn list_sessions(&self) -> Result<Vec<ChatSession>, BackendError> {
        let response = self
            .client
            .get("/api/chat/sessions")
            .send()
            .await
            .map_err(request_error)?;
        let list: SessionListResponse = read_json(response).await?;
        Ok(list.sessions)
    }

    async fn create_session(&self, title: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .post("/api/chat/sessions")
            .json(&CreateSessionRequest { title })
            .send()
            .await
            .map_err(request_error)?;
        let created: CreateSessionResponse = read_json(response).await?;
        Ok(created.id)
    }

    async fn session_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, BackendError> {
        let response = self
            .client
            .get(&format!("/api/chat/sessions/{}/messages", session_id))
            .send()
            .await
            .map_err(request_error)?;
        let history: MessagesResponse = read_json(response).await?;
        Ok(history.messages)
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(&format!("/api/chat/sessions/{}", session_id))
            .send()
            .await
            .map_err(request_error)?;
        check_status(response)?;
        Ok(())
    }

    async fn ask_stream(
        &self,
        question: &str,
        session_id: Option<&str>,
    ) -> Result<StreamHandle, BackendError> {
        let response = self
            .client
            .post("/api/ask/stream")
            .json(&AskStreamRequest {
                question,
                session_id,
            })
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response)?;

        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        tokio::spawn(async move {
            let mut decoder = SseFrameDecoder::new();
            let mut body = response.bytes_stream();
            while let Some(chunk) = body.next().await {
                match chunk {
                    Ok(bytes) => {
                        for event in decoder.feed(&bytes) {
                            if tx.send(event).await.is_err() {
                                // consumer went away; stop reading
                                return;
                            }
                        }
                    }
                    Err(e) => {
                        debug!("answer stream dropped: {}", e);
                        let _ = tx.send(StreamEvent::Failed(e.to_string())).await;
                        return;
                    }
                }
            }
            // body complete; an unterminated trailing line is never parsed
        });

        Ok(StreamHandle::new(rx))
    }

    async fn ask(&self, question: &str) -> Result<Answer, BackendError> {
        let response = self
            .client
            .post("/ask")
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(request_error)?;
        read_json(response).await
    }

    async fn send_feedback(&self, feedback: &Feedback) -> Result<(), BackendError> {
        let response = self
            .client
            .post("/api/feedback")
            .json(feedback)
            .send()
            .await
            .map_err(request_error)?;
        check_status(response)?;
        Ok(())
    }

    async fn stats(&self) -> Result<DashboardStats, BackendError> {
        let response = self
            .client
            .get("/stats")
            .send()
            .await
            .map_err(request_error)?;
        read_json(response).await
    }

    async fn entity_neighborhood(&self, entity: &str) -> Result<GraphData, BackendError> {
        let response = self
            .client
            .get(&format!("/api/graph/neighborhood/{}", entity))
            .send()
            .await
            .map_err(request_error)?;
        read_json(response).await
    }

    async fn document_graph(&self, doc_id: &str) -> Result<GraphData, BackendError> {
        let response = self
            .client
            .get(&format!("/api/graph/document/{}", doc_id))
            .send()
            .await
            .map_err(request_error)?;
        read_json(response).await
    }
}
