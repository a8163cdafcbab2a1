//! Session domain entities

use serde::{Deserialize, Serialize};

/// Title given to a session at creation, before the first question names it.
pub const DEFAULT_SESSION_TITLE: &str = "New Chat";

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A citation source attached to an assistant answer.
///
/// The backend owns the shape; the client treats it as opaque JSON and only
/// peeks at a few well-known fields for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Source(pub serde_json::Value);

impl Source {
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(|v| v.as_str())
    }

    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(|v| v.as_str())
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// Empty assistant message used as the stream target while an answer
    /// is still arriving.
    pub fn assistant_placeholder() -> Self {
        Self::assistant("")
    }
}

/// A chat session as listed by the backend (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
}

/// A rating for an assistant answer, posted back to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub session_id: Option<String>,
    pub question: String,
    pub answer: String,
    /// Positive values are thumbs-up, everything else thumbs-down.
    pub rating: i8,
}

impl Feedback {
    pub fn for_answer(session_id: Option<String>, answer: impl Into<String>, rating: i8) -> Self {
        Self {
            session_id,
            question: String::new(),
            answer: answer.into(),
            rating,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.rating > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn message_without_sources_deserializes() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"role": "user", "content": "hi"}"#).unwrap();
        assert_eq!(msg.role, Role::User);
        assert!(msg.sources.is_empty());
    }

    #[test]
    fn placeholder_is_empty_assistant_message() {
        let msg = ChatMessage::assistant_placeholder();
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.content.is_empty());
        assert!(msg.sources.is_empty());
    }

    #[test]
    fn source_exposes_known_fields() {
        let source = Source(serde_json::json!({"title": "Doc", "url": "/documents/1"}));
        assert_eq!(source.title(), Some("Doc"));
        assert_eq!(source.url(), Some("/documents/1"));

        let bare = Source(serde_json::json!(42));
        assert_eq!(bare.title(), None);
    }

    #[test]
    fn feedback_rating_sign() {
        assert!(Feedback::for_answer(None, "a", 1).is_positive());
        assert!(!Feedback::for_answer(None, "a", -1).is_positive());
        assert!(!Feedback::for_answer(None, "a", 0).is_positive());
    }
}
