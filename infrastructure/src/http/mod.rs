//! HTTP/SSE adapter for the knowledge backend.
//!
//! - [`client::ApiClient`] — thin reqwest wrapper that pins the base URL and
//!   attaches the `X-Requested-With: htmx` header on every request
//! - [`sse::SseFrameDecoder`] — incremental `data: <json>` line decoder
//! - [`backend::HttpKnowledgeBackend`] — the
//!   [`KnowledgeBackend`](kb_application::KnowledgeBackend) implementation

pub mod backend;
pub mod client;
pub mod sse;
