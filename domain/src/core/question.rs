//! Question value object

use serde::{Deserialize, Serialize};

/// A question to send to the knowledge backend (Value Object)
///
/// The content is trimmed on construction; a blank question cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
