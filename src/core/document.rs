//! Print document model.

use crate::converter::MarkdownToHtml;
use crate::sanitize::{sanitize, SanitizePolicy, SanitizedFragment};

/// Title style used unless a content source overrides it.
pub const DEFAULT_TITLE_STYLE: &str = "font-size: 24px; color: #333;";

/// Footer used by [`PrintDocument::build`].
pub const DEFAULT_FOOTER: &str = "Generated via markgate";

/// One body block of a print document, with an optional `<h2>` heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintSection {
    pub heading: Option<String>,
    pub heading_style: Option<String>,
    pub body: SanitizedFragment,
}

impl PrintSection {
    /// Transforms and sanitizes `markdown` into a section body.
    pub fn from_markdown(
        heading: Option<&str>,
        markdown: &str,
        converter: &MarkdownToHtml,
        policy: &SanitizePolicy,
    ) -> Self {
        Self {
            heading: heading.map(str::to_string),
            heading_style: None,
            body: sanitize(&converter.convert(markdown), policy),
        }
    }

    pub fn with_heading_style(mut self, style: impl Into<String>) -> Self {
        self.heading_style = Some(style.into());
        self
    }
}

/// A standalone, print-styled export of generated content.
///
/// Plain text fields (title, attribution, headings, footer) are escaped
/// when rendered; section bodies are already sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    pub title: String,
    pub title_style: String,
    pub attribution: Option<String>,
    pub sections: Vec<PrintSection>,
    pub footer: String,
    /// Extra rules appended inside the `@media print` block.
    pub extra_css: Option<String>,
}

impl PrintDocument {
    /// Creates an empty document with the default title style and footer.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_style: DEFAULT_TITLE_STYLE.to_string(),
            attribution: None,
            sections: Vec::new(),
            footer: DEFAULT_FOOTER.to_string(),
            extra_css: None,
        }
    }

    /// Builds a single-section document from markdown.
    ///
    /// The body goes through the transducer and then the sanitization gate
    /// under [`SanitizePolicy::print`].
    pub fn build(
        title: impl Into<String>,
        attribution: impl Into<String>,
        body_markdown: &str,
    ) -> Self {
        Self::build_with(
            title,
            attribution,
            body_markdown,
            &MarkdownToHtml::with_defaults(),
            &SanitizePolicy::print(),
        )
    }

    /// Like [`PrintDocument::build`], with an explicit converter and policy.
    pub fn build_with(
        title: impl Into<String>,
        attribution: impl Into<String>,
        body_markdown: &str,
        converter: &MarkdownToHtml,
        policy: &SanitizePolicy,
    ) -> Self {
        let mut document = Self::new(title);
        document.attribution = Some(attribution.into());
        document.push_section(PrintSection::from_markdown(
            None,
            body_markdown,
            converter,
            policy,
        ));
        document
    }

    pub fn push_section(&mut self, section: PrintSection) {
        self.sections.push(section);
    }

    pub fn with_title_style(mut self, style: impl Into<String>) -> Self {
        self.title_style = style.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn with_extra_css(mut self, css: impl Into<String>) -> Self {
        self.extra_css = Some(css.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sanitizes_body() {
        let document = PrintDocument::build(
            "Notes",
            "Source: test",
            "# Title\n<script>alert(1)</script>",
        );
        assert_eq!(document.sections.len(), 1);
        let body = document.sections[0].body.as_str();
        assert!(body.contains("<h1>Title</h1>"));
        assert!(!body.contains("script"));
        assert!(!body.contains("alert"));
    }

    #[test]
    fn test_build_defaults() {
        let document = PrintDocument::build("T", "A", "x");
        assert_eq!(document.title_style, DEFAULT_TITLE_STYLE);
        assert_eq!(document.footer, DEFAULT_FOOTER);
        assert_eq!(document.attribution.as_deref(), Some("A"));
        assert!(document.extra_css.is_none());
    }
}
