//! Fenced code blocks.

use super::cached;
use regex::Regex;
use std::sync::OnceLock;

pub(super) const FENCE_PATTERN: &str = r"```(.*?)\n([\s\S]*?)```";

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, FENCE_PATTERN)
}

/// Emits `<pre><code class="language-<tag>">` for every fenced block.
///
/// The block body is left in place, so later line rules still see it.
pub(super) fn fenced_blocks(input: &str) -> String {
    fence_regex()
        .replace_all(input, "<pre><code class=\"language-${1}\">${2}</code></pre>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tag_captured() {
        assert_eq!(
            fenced_blocks("```rust\nlet x = 1;\n```"),
            "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_missing_language_tag() {
        assert_eq!(
            fenced_blocks("```\nplain\n```"),
            "<pre><code class=\"language-\">plain\n</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_passes_through() {
        assert_eq!(fenced_blocks("```rust\nlet x = 1;"), "```rust\nlet x = 1;");
    }
}
