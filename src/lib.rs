//! # markgate
//!
//! Markdown to HTML conversion for generated study content (notes, document
//! summaries, learning roadmaps, question banks), a sanitization gate in
//! front of every live rendering surface, and print export under a scoped
//! attach/print/detach discipline.
//!
//! ## Example
//!
//! ```
//! use markgate::{sanitize, transform, SanitizePolicy};
//!
//! let html = transform("[docs](https://example.com)");
//! let safe = sanitize(&html, &SanitizePolicy::notes());
//! assert_eq!(safe.as_str(), "docs");
//! ```

pub mod adapters;
pub mod config;
pub mod converter;
pub mod core;
pub mod error;
pub mod logging;
pub mod printer;
pub mod render;
pub mod sanitize;
pub mod source;

pub use adapters::host::{MemoryPage, PrintHost};
pub use converter::{transform, MarkdownToHtml, Stage};
pub use core::document::{PrintDocument, PrintSection};
pub use error::{Error, Result};
pub use printer::{AttachedDocument, Printer, PRINT_CONTAINER_ID};
pub use render::{FragmentRenderer, Renderer, StandaloneRenderer};
pub use sanitize::{sanitize, SanitizePolicy, SanitizedFragment};
pub use source::{ContentSource, Roadmap};

/// Options for markdown to HTML conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Inline style added to every generated anchor, after `rel`.
    pub link_style: Option<String>,
    /// Post-pass restyling `<h2>` headings with well-known titles.
    pub heading_highlight: Option<HeadingHighlight>,
}

/// Restyles `<h2>` elements whose entire text matches one of `titles`.
///
/// Matching is case-insensitive; the original title text is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingHighlight {
    /// Heading texts to match.
    pub titles: Vec<String>,
    /// Inline style placed on matching headings.
    pub style: String,
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    fn source_from_name(name: &str) -> PyResult<ContentSource> {
        name.parse::<ContentSource>()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Converts markdown to unsanitized HTML.
    #[pyfunction]
    fn transform_markdown(text: Option<String>) -> String {
        transform(text.as_deref())
    }

    /// Converts markdown to HTML sanitized for the given content source.
    #[pyfunction]
    fn render_markdown(text: Option<String>, source: String) -> PyResult<String> {
        let source = source_from_name(&source)?;
        Ok(source.render(text.as_deref()).into_string())
    }

    /// Builds a standalone print document for the given content source.
    #[pyfunction]
    #[pyo3(signature = (text, source, subject=None))]
    fn print_document(text: String, source: String, subject: Option<String>) -> PyResult<String> {
        let source = source_from_name(&source)?;
        let document = source.print_document(subject.as_deref(), &text);
        Ok(StandaloneRenderer.render(&document))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn markgate(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(transform_markdown, m)?)?;
        m.add_function(wrap_pyfunction!(render_markdown, m)?)?;
        m.add_function(wrap_pyfunction!(print_document, m)?)?;
        Ok(())
    }
}
