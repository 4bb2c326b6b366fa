//! Inline rules: emphasis, inline code, links, images.

use super::cached;
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub(super) const BOLD_PATTERNS: [&str; 2] = [r"\*\*(.*?)\*\*", r"__(.*?)__"];
pub(super) const ITALIC_PATTERNS: [&str; 2] = [r"\*(.*?)\*", r"_(.*?)_"];
pub(super) const INLINE_CODE_PATTERN: &str = r"`(.*?)`";
pub(super) const LINK_PATTERN: &str = r"\[([^\]]+)\]\(([^)]+)\)";
pub(super) const IMAGE_PATTERN: &str = r"!\[([^\]]+)\]\(([^)]+)\)";

/// Fixed class placed on every generated image.
const IMAGE_CLASS: &str = "max-w-full h-auto";

fn bold_regexes() -> [&'static Regex; 2] {
    static STARS: OnceLock<Regex> = OnceLock::new();
    static UNDERSCORES: OnceLock<Regex> = OnceLock::new();
    [
        cached(&STARS, BOLD_PATTERNS[0]),
        cached(&UNDERSCORES, BOLD_PATTERNS[1]),
    ]
}

fn italic_regexes() -> [&'static Regex; 2] {
    static STAR: OnceLock<Regex> = OnceLock::new();
    static UNDERSCORE: OnceLock<Regex> = OnceLock::new();
    [
        cached(&STAR, ITALIC_PATTERNS[0]),
        cached(&UNDERSCORE, ITALIC_PATTERNS[1]),
    ]
}

fn inline_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, INLINE_CODE_PATTERN)
}

fn link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, LINK_PATTERN)
}

fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, IMAGE_PATTERN)
}

fn wrap_all(input: &str, regexes: [&Regex; 2], tag: &str) -> String {
    let template = format!("<{tag}>${{1}}</{tag}>");
    let first = regexes[0].replace_all(input, template.as_str());
    regexes[1]
        .replace_all(&first, template.as_str())
        .into_owned()
}

pub(super) fn bold(input: &str) -> String {
    wrap_all(input, bold_regexes(), "strong")
}

/// Runs after [`bold`], so doubled markers are already consumed.
pub(super) fn italic(input: &str) -> String {
    wrap_all(input, italic_regexes(), "em")
}

pub(super) fn inline_code(input: &str) -> String {
    inline_code_regex()
        .replace_all(input, "<code>${1}</code>")
        .into_owned()
}

/// Rewrites `[text](url)` into an anchor opening in a new tab.
///
/// A bracket directly preceded by `!` is image syntax and is left for
/// [`images`].
pub(super) fn links(input: &str, style: Option<&str>) -> String {
    let style = style
        .map(|style| format!(" style=\"{style}\""))
        .unwrap_or_default();

    link_regex()
        .replace_all(input, |caps: &Captures<'_>| {
            let start = caps.get(0).map_or(0, |m| m.start());
            if input[..start].ends_with('!') {
                return caps[0].to_string();
            }
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"{}>{}</a>",
                &caps[2], style, &caps[1]
            )
        })
        .into_owned()
}

pub(super) fn images(input: &str) -> String {
    let template = format!("<img src=\"${{2}}\" alt=\"${{1}}\" class=\"{IMAGE_CLASS}\" />");
    image_regex()
        .replace_all(input, template.as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_both_markers() {
        assert_eq!(bold("**a** __b__"), "<strong>a</strong> <strong>b</strong>");
    }

    #[test]
    fn test_italic_after_bold() {
        assert_eq!(
            italic(&bold("**bold** and *italic*")),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_italic_underscores_inside_words() {
        assert_eq!(italic("snake_case_name"), "snake<em>case</em>name");
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert_eq!(italic("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(inline_code("run `cargo test` now"), "run <code>cargo test</code> now");
    }

    #[test]
    fn test_links_leave_image_syntax() {
        assert_eq!(links("![alt](a.png)", None), "![alt](a.png)");
        assert_eq!(
            links("[a](b)[c](d)", None),
            "<a href=\"b\" target=\"_blank\" rel=\"noopener noreferrer\">a</a>\
             <a href=\"d\" target=\"_blank\" rel=\"noopener noreferrer\">c</a>"
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            images("![alt](a.png)"),
            "<img src=\"a.png\" alt=\"alt\" class=\"max-w-full h-auto\" />"
        );
    }
}
