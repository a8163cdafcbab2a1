//! Infrastructure layer for kb-console
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP/SSE knowledge backend and
//! configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{ConfigLoader, FileBackendConfig, FileConfig, FileReplConfig, FileUiConfig};
pub use http::{
    backend::HttpKnowledgeBackend,
    client::ApiClient,
    sse::SseFrameDecoder,
};
