//! Application layer for kb-console
//!
//! This crate contains the chat controller use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    backend::{BackendError, KnowledgeBackend, StreamHandle},
    notifier::{NoNotifier, Notifier, Severity},
    view::{NoView, ViewEvent, ViewSink},
};
pub use use_cases::chat::ChatController;
