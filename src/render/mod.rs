//! Serializers for print documents.

mod escape;
mod style;

use crate::core::document::{PrintDocument, PrintSection};

pub use escape::escape_html;
pub use style::{print_stylesheet, PRINT_CONTAINER_ID};

const CONTAINER_STYLE: &str =
    "font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px;";
const ATTRIBUTION_STYLE: &str = "font-style: italic; color: #666; margin-bottom: 20px;";
const SECTION_STYLE: &str = "margin-bottom: 30px;";
const FOOTER_STYLE: &str =
    "margin-top: 40px; border-top: 1px solid #eee; padding-top: 12px; font-size: 12px; color: #999;";

pub trait Renderer {
    fn render(&self, document: &PrintDocument) -> String;
}

/// Renders the content placed inside the print container: the document
/// template followed by its `<style>` block.
#[derive(Debug, Default, Clone, Copy)]
pub struct FragmentRenderer;

impl Renderer for FragmentRenderer {
    fn render(&self, document: &PrintDocument) -> String {
        let mut out = String::new();

        out.push_str(&format!("<div style=\"{CONTAINER_STYLE}\">\n"));
        out.push_str(&format!(
            "<h1 style=\"{}\">{}</h1>\n",
            escape_html(&document.title_style),
            escape_html(&document.title)
        ));
        if let Some(attribution) = &document.attribution {
            out.push_str(&format!(
                "<div style=\"{ATTRIBUTION_STYLE}\">{}</div>\n",
                escape_html(attribution)
            ));
        }
        for section in &document.sections {
            render_section(section, &mut out);
        }
        out.push_str(&format!(
            "<div style=\"{FOOTER_STYLE}\">{}</div>\n",
            escape_html(&document.footer)
        ));
        out.push_str("</div>\n");

        out.push_str("<style>\n");
        out.push_str(&print_stylesheet(
            PRINT_CONTAINER_ID,
            document.extra_css.as_deref(),
        ));
        out.push_str("\n</style>");
        out
    }
}

fn render_section(section: &PrintSection, out: &mut String) {
    match &section.heading {
        Some(heading) => {
            out.push_str(&format!("<div style=\"{SECTION_STYLE}\">\n"));
            match &section.heading_style {
                Some(style) => out.push_str(&format!(
                    "<h2 style=\"{}\">{}</h2>\n",
                    escape_html(style),
                    escape_html(heading)
                )),
                None => out.push_str(&format!("<h2>{}</h2>\n", escape_html(heading))),
            }
            out.push_str(section.body.as_str());
            out.push_str("\n</div>\n");
        }
        None => {
            out.push_str("<div>");
            out.push_str(section.body.as_str());
            out.push_str("</div>\n");
        }
    }
}

/// Renders a complete HTML page containing the print container, for export
/// targets that have no host document.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandaloneRenderer;

impl Renderer for StandaloneRenderer {
    fn render(&self, document: &PrintDocument) -> String {
        let container = format!(
            "<div id=\"{PRINT_CONTAINER_ID}\">{}</div>",
            FragmentRenderer.render(document)
        );
        page(&document.title, &container)
    }
}

/// Wraps `body` markup in a minimal HTML page.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::{sanitize, SanitizePolicy};

    fn sample() -> PrintDocument {
        let mut document = PrintDocument::new("Notes <1>");
        document.attribution = Some("Source: a&b".to_string());
        document.push_section(PrintSection {
            body: sanitize("<p>body</p>", &SanitizePolicy::notes()),
            ..Default::default()
        });
        document
    }

    #[test]
    fn test_fragment_escapes_plain_fields() {
        let html = FragmentRenderer.render(&sample());
        assert!(html.contains("<h1 style=\"font-size: 24px; color: #333;\">Notes &lt;1&gt;</h1>"));
        assert!(html.contains(">Source: a&amp;b</div>"));
        assert!(html.contains("<div><p>body</p></div>"));
        assert!(html.contains(">Generated via markgate</div>"));
    }

    #[test]
    fn test_fragment_ends_with_print_style() {
        let html = FragmentRenderer.render(&sample());
        assert!(html.contains("<style>\n@media print {"));
        assert!(html.ends_with("}\n</style>"));
    }

    #[test]
    fn test_fragment_without_attribution() {
        let mut document = sample();
        document.attribution = None;
        let html = FragmentRenderer.render(&document);
        assert!(!html.contains("font-style: italic"));
    }

    #[test]
    fn test_section_heading_with_style() {
        let mut document = PrintDocument::new("Roadmap");
        document.push_section(
            PrintSection {
                heading: Some("Recommended Resources".to_string()),
                ..Default::default()
            }
            .with_heading_style("color: #60a5fa;"),
        );
        let html = FragmentRenderer.render(&document);
        assert!(html.contains(
            "<div style=\"margin-bottom: 30px;\">\n<h2 style=\"color: #60a5fa;\">Recommended Resources</h2>\n"
        ));
    }

    #[test]
    fn test_standalone_wraps_container() {
        let html = StandaloneRenderer.render(&sample());
        assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(html.contains("<title>Notes &lt;1&gt;</title>"));
        assert!(html.contains("<div id=\"print-container\"><div style=\"font-family: Arial"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }
}
