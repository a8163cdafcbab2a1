//! Markdown-lite renderer for chat answers.
//!
//! Converts the constrained markdown subset the backend emits (plus
//! numeric citation markers) into HTML fragments. The passes run in a
//! fixed order, each on the previous pass's output; fenced code blocks go
//! first so the inline-code pass never sees their contents.
//!
//! The input is treated as trusted: the backend sanitizes its output
//! before it reaches this renderer, so no HTML escaping happens here.

use regex::Regex;
use std::sync::LazyLock;

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n(.*?)```").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap());

/// Badge markup for a `[N]` citation marker; styled by the chat view's
/// stylesheet.
const CITATION_BADGE: &str = "<span class=\"inline-flex items-center justify-center w-5 h-5 \
     text-xs bg-primary-100 dark:bg-primary-900/30 text-primary-700 dark:text-primary-300 \
     rounded-full font-medium cursor-pointer\">$1</span>";

/// Render chat text to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Code blocks
    let html = CODE_BLOCK.replace_all(text, "<pre><code class=\"language-$1\">$2</code></pre>");
    // Inline code
    let html = INLINE_CODE.replace_all(&html, "<code>$1</code>");
    // Bold
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    // Italic
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    // Citations [N] as badges
    let html = CITATION.replace_all(&html, CITATION_BADGE);
    // Line breaks
    html.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn fenced_code_block_with_language() {
        let html = render_markdown("```rust\nlet x = 1;\n```");
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">let x = 1;<br></code></pre>"
        );
    }

    #[test]
    fn fenced_code_block_without_language() {
        let html = render_markdown("```\nplain\n```");
        assert!(html.starts_with("<pre><code class=\"language-\">"));
    }

    #[test]
    fn code_fence_containing_a_single_backtick_is_not_mangled() {
        let html = render_markdown("```rust\nlet tick = '`';\n```");
        // the fence pass consumed the block before the inline-code pass ran
        assert!(html.contains("let tick = '`';"));
        assert!(!html.contains("<code>'")); // no spurious inline code element
    }

    #[test]
    fn inline_code() {
        assert_eq!(
            render_markdown("use `let` here"),
            "use <code>let</code> here"
        );
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(render_markdown("**bold**"), "<strong>bold</strong>");
        assert_eq!(render_markdown("*italic*"), "<em>italic</em>");
    }

    #[test]
    fn bold_inside_italic_markers() {
        assert_eq!(
            render_markdown("*a **b** c*"),
            "<em>a <strong>b</strong> c</em>"
        );
    }

    #[test]
    fn citation_marker_becomes_a_badge() {
        let html = render_markdown("See [12] for details");
        assert!(html.contains(">12</span>"));
        assert!(!html.contains("[12]"));
    }

    #[test]
    fn non_numeric_brackets_are_left_alone() {
        let html = render_markdown("array[index]");
        assert_eq!(html, "array[index]");
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(render_markdown("a\nb"), "a<br>b");
    }
}
