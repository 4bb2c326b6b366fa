//! Allow-list policies, one per rendering surface.

use crate::{Error, Result};
use std::collections::BTreeSet;

const BASE_TAGS: [&str; 14] = [
    "h1",
    "h2",
    "h3",
    "p",
    "strong",
    "em",
    "pre",
    "code",
    "ul",
    "ol",
    "li",
    "img",
    "blockquote",
    "br",
];
const BASE_ATTRIBUTES: [&str; 5] = ["class", "target", "rel", "src", "alt"];
const LINK_TAGS: [&str; 1] = ["a"];
const LINK_ATTRIBUTES: [&str; 2] = ["href", "style"];

/// URL schemes admitted in `href`/`src` unless a policy overrides them.
pub const DEFAULT_URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Elements removed together with their content, under every policy.
pub(crate) const CLEAN_CONTENT_TAGS: [&str; 2] = ["script", "style"];

/// Elements that load or run code, restyle the page, redirect it, or submit
/// it elsewhere.
const FORBIDDEN_TAGS: [&str; 16] = [
    "script", "style", "iframe", "frame", "frameset", "object", "embed", "applet", "link",
    "meta", "base", "form", "noscript", "template", "svg", "math",
];
const FORBIDDEN_ATTRIBUTES: [&str; 4] = ["formaction", "srcdoc", "http-equiv", "xlink:href"];
const FORBIDDEN_SCHEMES: [&str; 3] = ["javascript", "data", "vbscript"];

/// A named allow-list of tags, attributes and URL schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizePolicy {
    name: String,
    tags: BTreeSet<String>,
    attributes: BTreeSet<String>,
    url_schemes: BTreeSet<String>,
}

impl SanitizePolicy {
    /// Creates a custom policy.
    ///
    /// Entries are lower-cased. Script-capable, resource-loading and
    /// form-submitting tags, `on*` event handlers and executable or
    /// inline-data schemes are rejected.
    pub fn new<T, A, U>(name: impl Into<String>, tags: T, attributes: A, url_schemes: U) -> Result<Self>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
        U: IntoIterator,
        U::Item: AsRef<str>,
    {
        let tags = normalize(tags);
        if let Some(tag) = tags.iter().find(|t| FORBIDDEN_TAGS.contains(&t.as_str())) {
            return Err(Error::ForbiddenTag(tag.clone()));
        }

        let attributes = normalize(attributes);
        if let Some(attr) = attributes.iter().find(|a| is_forbidden_attribute(a)) {
            return Err(Error::ForbiddenAttribute(attr.clone()));
        }

        let url_schemes = normalize(url_schemes);
        if let Some(scheme) = url_schemes
            .iter()
            .find(|s| FORBIDDEN_SCHEMES.contains(&s.as_str()))
        {
            return Err(Error::ForbiddenScheme(scheme.clone()));
        }

        Ok(Self {
            name: name.into(),
            tags,
            attributes,
            url_schemes,
        })
    }

    fn preset(name: &str, links: bool) -> Self {
        let mut tags = normalize(BASE_TAGS);
        let mut attributes = normalize(BASE_ATTRIBUTES);
        if links {
            tags.extend(normalize(LINK_TAGS));
            attributes.extend(normalize(LINK_ATTRIBUTES));
        }
        Self {
            name: name.to_string(),
            tags,
            attributes,
            url_schemes: normalize(DEFAULT_URL_SCHEMES),
        }
    }

    /// Notes view: headings, lists, code and images; no links or inline style.
    pub fn notes() -> Self {
        Self::preset("notes", false)
    }

    /// Document summary view; same allow-list as [`SanitizePolicy::notes`].
    pub fn document_summary() -> Self {
        Self::preset("document-summary", false)
    }

    /// Roadmap view: additionally admits `<a>`, `href` and `style`.
    pub fn roadmap() -> Self {
        Self::preset("roadmap", true)
    }

    /// Question bank view; same allow-list as [`SanitizePolicy::roadmap`].
    pub fn question_bank() -> Self {
        Self::preset("question-bank", true)
    }

    /// Print export default: links and inline style survive into the PDF.
    pub fn print() -> Self {
        Self::preset("print", true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    pub fn url_schemes(&self) -> impl Iterator<Item = &str> {
        self.url_schemes.iter().map(String::as_str)
    }

    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_ascii_lowercase())
    }

    pub fn allows_attribute(&self, attribute: &str) -> bool {
        self.attributes.contains(&attribute.to_ascii_lowercase())
    }

    /// Whether anchors with a destination survive this policy.
    pub fn allows_links(&self) -> bool {
        self.allows_tag("a") && self.allows_attribute("href")
    }

    pub(crate) fn builder(&self) -> ammonia::Builder<'_> {
        let mut builder = ammonia::Builder::empty();
        builder
            .tags(self.tags().collect())
            .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect())
            .generic_attributes(self.attributes().collect())
            .url_schemes(self.url_schemes().collect())
            .url_relative(ammonia::UrlRelative::PassThrough)
            .link_rel(None)
            .strip_comments(true);
        builder
    }
}

fn normalize<I>(items: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_ascii_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

fn is_forbidden_attribute(attribute: &str) -> bool {
    attribute.starts_with("on") || FORBIDDEN_ATTRIBUTES.contains(&attribute)
}
