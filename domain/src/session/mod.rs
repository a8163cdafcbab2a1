//! Chat session domain.
//!
//! - [`entities::ChatSession`] — a conversation session known to the backend
//! - [`entities::ChatMessage`] — a single message within a session
//! - [`stream::StreamEvent`] — events of a streaming answer
//! - [`title::derive_title`] — client-side session title from the first question

pub mod entities;
pub mod response;
pub mod stream;
pub mod title;
