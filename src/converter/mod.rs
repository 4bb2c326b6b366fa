//! Converter modules for markdown to HTML transformation.

mod block;
mod code;
mod inline;
mod stage;

use crate::TransformOptions;
use regex::Regex;
use std::sync::OnceLock;

pub use self::stage::Stage;

/// Main converter struct that applies the ordered rule stages.
///
/// The output is *not* safe for live insertion; pass it through
/// [`crate::sanitize`] first.
///
/// Options are compiled once here; reuse a converter across calls.
#[derive(Debug, Clone, Default)]
pub struct MarkdownToHtml {
    options: TransformOptions,
    highlight: Option<block::CompiledHighlight>,
}

impl MarkdownToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: TransformOptions) -> Self {
        let highlight = options
            .heading_highlight
            .as_ref()
            .and_then(block::CompiledHighlight::new);
        Self { options, highlight }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(TransformOptions::default())
    }

    /// Converts markdown to HTML.
    ///
    /// Total over its input: empty or absent text yields an empty string and
    /// unmatched syntax passes through as paragraph text.
    pub fn convert<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => return String::new(),
        };

        let mut html = text.replace("\r\n", "\n");
        for stage in Stage::ALL {
            html = stage.apply(&html, &self.options);
            tracing::trace!(stage = stage.name(), len = html.len(), "applied stage");
        }

        if let Some(highlight) = &self.highlight {
            html = highlight.apply(&html);
        }

        tracing::debug!(
            input_len = text.len(),
            output_len = html.len(),
            "transformed markdown"
        );
        html
    }
}

/// Converts markdown to HTML with default options.
///
/// Accepts `&str` or `Option<&str>`; absent text maps to `""`.
pub fn transform<'a>(text: impl Into<Option<&'a str>>) -> String {
    MarkdownToHtml::with_defaults().convert(text)
}

/// Compiles a rule pattern once per process.
fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("rule patterns are valid regexes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeadingHighlight;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_and_absent_input() {
        assert_eq!(transform(""), "");
        assert_eq!(transform(None::<&str>), "");
        assert_eq!(transform(Some("")), "");
    }

    #[test]
    fn test_heading_then_paragraph() {
        assert_eq!(
            transform("# Title\nSome text"),
            "<h1>Title</h1><br /><p>Some text</p>"
        );
    }

    #[test]
    fn test_crlf_is_normalized() {
        assert_eq!(transform("a\r\nb"), "<p>a</p><br /><p>b</p>");
    }

    #[test]
    fn test_trailing_newline_yields_empty_paragraph() {
        assert_eq!(transform("a\n"), "<p>a</p><br /><p></p>");
    }

    #[test]
    fn test_link_style_option() {
        let converter = MarkdownToHtml::new(TransformOptions {
            link_style: Some("color: red;".to_string()),
            ..Default::default()
        });
        assert_eq!(
            converter.convert("[a](https://x.y)"),
            "<a href=\"https://x.y\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"color: red;\">a</a>"
        );
    }

    #[test]
    fn test_heading_highlight_option() {
        let converter = MarkdownToHtml::new(TransformOptions {
            heading_highlight: Some(HeadingHighlight {
                titles: vec!["Books".to_string()],
                style: "color: #93c5fd;".to_string(),
            }),
            ..Default::default()
        });
        assert_eq!(
            converter.convert("## books\n## Other"),
            "<h2 style=\"color: #93c5fd;\">books</h2><br /><h2>Other</h2>"
        );
    }
}
