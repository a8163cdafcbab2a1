//! Client-side session titles.
//!
//! A freshly created session carries [`DEFAULT_SESSION_TITLE`] until the
//! first question names it. The backend may later overwrite the title with
//! one of its own; until then the client derives one from the question text.

use super::entities::DEFAULT_SESSION_TITLE;

/// Maximum number of characters kept from the question text.
const TITLE_MAX_CHARS: usize = 50;

/// Derive a session title from the first question.
///
/// Keeps the first 50 characters and appends `...` when the question is
/// longer. Operates on characters, not bytes, so multibyte text is never
/// split mid-character.
pub fn derive_title(question: &str) -> String {
    let mut chars = question.char_indices();
    match chars.nth(TITLE_MAX_CHARS) {
        None => question.to_string(),
        Some((cut, _)) => format!("{}...", &question[..cut]),
    }
}

/// True if a session still carries the creation-time placeholder title.
pub fn is_default_title(title: &str) -> bool {
    title == DEFAULT_SESSION_TITLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_question_is_kept_verbatim() {
        let q = "What is the capital of France?";
        assert_eq!(q.chars().count(), 30);
        assert_eq!(derive_title(q), q);
    }

    #[test]
    fn fifty_char_question_is_not_truncated() {
        let q = "x".repeat(50);
        assert_eq!(derive_title(&q), q);
    }

    #[test]
    fn long_question_keeps_first_fifty_chars() {
        let q = "y".repeat(60);
        let title = derive_title(&q);
        assert_eq!(title, format!("{}...", "y".repeat(50)));
        assert_eq!(title.chars().count(), 53);
    }

    #[test]
    fn multibyte_question_truncates_on_char_boundary() {
        let q = "é".repeat(60);
        let title = derive_title(&q);
        assert_eq!(title, format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn default_title_detection() {
        assert!(is_default_title(DEFAULT_SESSION_TITLE));
        assert!(!is_default_title("What is Rust?"));
    }
}
