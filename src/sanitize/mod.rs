//! Sanitization gate between transformed markup and a live document.

mod policy;

use std::fmt;

pub use self::policy::{SanitizePolicy, DEFAULT_URL_SCHEMES};

/// Markup that passed through [`sanitize`].
///
/// Contains only tags and attributes admitted by the policy it was produced
/// under, never an `on*` attribute, and no `href`/`src` outside the policy's
/// URL schemes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedFragment(String);

impl SanitizedFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SanitizedFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Filters `html` against `policy`.
///
/// Disallowed elements are unwrapped and their text kept, except `script`
/// and `style`, which are dropped with their content. Disallowed attributes
/// and URLs are removed silently.
pub fn sanitize(html: &str, policy: &SanitizePolicy) -> SanitizedFragment {
    if html.is_empty() {
        return SanitizedFragment::default();
    }

    let cleaned = policy.builder().clean(html).to_string();
    tracing::debug!(
        policy = policy.name(),
        input_len = html.len(),
        output_len = cleaned.len(),
        "sanitized fragment"
    );
    SanitizedFragment(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_link_survives_link_enabled_policy() {
        let html = transform("[docs](https://example.com)");
        assert_eq!(
            sanitize(&html, &SanitizePolicy::roadmap()).as_str(),
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a>"
        );
    }

    #[test]
    fn test_link_unwrapped_by_link_disabled_policy() {
        let html = transform("[docs](https://example.com)");
        assert_eq!(sanitize(&html, &SanitizePolicy::notes()).as_str(), "docs");
    }

    #[test]
    fn test_script_removed_with_content() {
        let safe = sanitize("<p>hi</p><script>alert(1)</script>", &SanitizePolicy::roadmap());
        assert_eq!(safe.as_str(), "<p>hi</p>");
    }

    #[test]
    fn test_event_handler_stripped() {
        let safe = sanitize(
            "<img src=\"x.png\" onerror=\"alert(1)\">",
            &SanitizePolicy::notes(),
        );
        assert_eq!(safe.as_str(), "<img src=\"x.png\">");
    }

    #[test]
    fn test_javascript_href_removed() {
        let safe = sanitize(
            "<a href=\"javascript:alert(1)\">x</a>",
            &SanitizePolicy::roadmap(),
        );
        assert_eq!(safe.as_str(), "<a>x</a>");
    }

    #[test]
    fn test_data_src_removed() {
        let safe = sanitize(
            "<img src=\"data:image/png;base64,AAAA\" alt=\"a\">",
            &SanitizePolicy::notes(),
        );
        assert_eq!(safe.as_str(), "<img alt=\"a\">");
    }

    #[test]
    fn test_relative_href_kept() {
        let safe = sanitize("<a href=\"/docs\">x</a>", &SanitizePolicy::roadmap());
        assert_eq!(safe.as_str(), "<a href=\"/docs\">x</a>");
    }

    #[test]
    fn test_style_attribute_depends_on_policy() {
        let html = "<p style=\"color: red;\">x</p>";
        assert_eq!(
            sanitize(html, &SanitizePolicy::roadmap()).as_str(),
            "<p style=\"color: red;\">x</p>"
        );
        assert_eq!(sanitize(html, &SanitizePolicy::notes()).as_str(), "<p>x</p>");
    }

    #[test]
    fn test_break_serialized_without_slash() {
        assert_eq!(
            sanitize("a<br />b", &SanitizePolicy::notes()).as_str(),
            "a<br>b"
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(sanitize("", &SanitizePolicy::notes()).is_empty());
    }
}
