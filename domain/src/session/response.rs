//! Non-streaming answer payload.
//!
//! The legacy `/ask` endpoint returns the whole answer in one response.
//! It is used as the fallback when the streaming path fails.

use super::entities::Source;
use serde::{Deserialize, Serialize};

/// A complete answer with its citation sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Answer {
    pub fn new(answer: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            answer: answer.into(),
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_sources() {
        let answer: Answer = serde_json::from_str(r#"{"answer": "42"}"#).unwrap();
        assert_eq!(answer.answer, "42");
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn deserializes_with_sources() {
        let answer: Answer =
            serde_json::from_str(r#"{"answer": "42", "sources": [{"title": "Doc"}]}"#).unwrap();
        assert_eq!(answer.sources.len(), 1);
        assert_eq!(answer.sources[0].title(), Some("Doc"));
    }
}
