//! Line-oriented rules: headings, lists, blockquotes, paragraph fallback.

use super::cached;
use crate::HeadingHighlight;
use regex::Regex;
use std::sync::OnceLock;

pub(super) const HEADING_PATTERNS: [&str; 3] =
    [r"(?m)^### (.*)$", r"(?m)^## (.*)$", r"(?m)^# (.*)$"];
const HEADING_TEMPLATES: [&str; 3] = ["<h3>${1}</h3>", "<h2>${1}</h2>", "<h1>${1}</h1>"];

pub(super) const LIST_PATTERNS: [&str; 4] = [
    r"(?m)^\* (.*)$",
    r"(?m)^- (.*)$",
    r"(?m)^\+ (.*)$",
    r"(?m)^[0-9]+\. (.*)$",
];
const LIST_TEMPLATES: [&str; 4] = [
    "<ul><li>${1}</li></ul>",
    "<ul><li>${1}</li></ul>",
    "<ul><li>${1}</li></ul>",
    "<ol><li>${1}</li></ol>",
];

pub(super) const BLOCKQUOTE_PATTERN: &str = r"(?m)^> (.*)$";

pub(super) const LIST_MERGE_PATTERNS: [&str; 2] = [r"</ul>\s*<ul>", r"</ol>\s*<ol>"];

fn heading_regexes() -> [&'static Regex; 3] {
    static H3: OnceLock<Regex> = OnceLock::new();
    static H2: OnceLock<Regex> = OnceLock::new();
    static H1: OnceLock<Regex> = OnceLock::new();
    [
        cached(&H3, HEADING_PATTERNS[0]),
        cached(&H2, HEADING_PATTERNS[1]),
        cached(&H1, HEADING_PATTERNS[2]),
    ]
}

fn list_regexes() -> [&'static Regex; 4] {
    static STAR: OnceLock<Regex> = OnceLock::new();
    static DASH: OnceLock<Regex> = OnceLock::new();
    static PLUS: OnceLock<Regex> = OnceLock::new();
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    [
        cached(&STAR, LIST_PATTERNS[0]),
        cached(&DASH, LIST_PATTERNS[1]),
        cached(&PLUS, LIST_PATTERNS[2]),
        cached(&ORDERED, LIST_PATTERNS[3]),
    ]
}

fn blockquote_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, BLOCKQUOTE_PATTERN)
}

fn list_merge_regexes() -> [&'static Regex; 2] {
    static UL: OnceLock<Regex> = OnceLock::new();
    static OL: OnceLock<Regex> = OnceLock::new();
    [
        cached(&UL, LIST_MERGE_PATTERNS[0]),
        cached(&OL, LIST_MERGE_PATTERNS[1]),
    ]
}

fn replace_each(input: &str, regexes: &[&Regex], templates: &[&str]) -> String {
    let mut output = input.to_string();
    for (regex, template) in regexes.iter().zip(templates) {
        output = regex.replace_all(&output, *template).into_owned();
    }
    output
}

/// `###`, `##`, then `#`, so the single marker never swallows a longer one.
pub(super) fn headings(input: &str) -> String {
    replace_each(input, &heading_regexes(), &HEADING_TEMPLATES)
}

/// Wraps every qualifying line in its own single-item list.
pub(super) fn lists(input: &str) -> String {
    replace_each(input, &list_regexes(), &LIST_TEMPLATES)
}

pub(super) fn blockquotes(input: &str) -> String {
    blockquote_regex()
        .replace_all(input, "<blockquote>${1}</blockquote>")
        .into_owned()
}

/// Wraps every line that does not already open an element in `<p>`.
pub(super) fn paragraphs(input: &str) -> String {
    let mut output = String::with_capacity(input.len() + input.len() / 4);
    for (index, line) in input.split('\n').enumerate() {
        if index > 0 {
            output.push('\n');
        }
        if opens_element(line) {
            output.push_str(line);
        } else {
            output.push_str("<p>");
            output.push_str(line);
            output.push_str("</p>");
        }
    }
    output
}

fn opens_element(line: &str) -> bool {
    let mut bytes = line.bytes();
    bytes.next() == Some(b'<') && bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
}

/// Removes list boundaries between adjacent single-item lists.
pub(super) fn merge_lists(input: &str) -> String {
    replace_each(input, &list_merge_regexes(), &["", ""])
}

/// A [`HeadingHighlight`] compiled into a single `<h2>` rewrite.
#[derive(Debug, Clone)]
pub(super) struct CompiledHighlight {
    regex: Regex,
    replacement: String,
}

impl CompiledHighlight {
    /// Returns `None` when there is nothing to match.
    pub(super) fn new(highlight: &HeadingHighlight) -> Option<Self> {
        if highlight.titles.is_empty() {
            return None;
        }

        let alternatives = highlight
            .titles
            .iter()
            .map(|title| regex::escape(title))
            .collect::<Vec<_>>()
            .join("|");

        match Regex::new(&format!("(?i)<h2>({alternatives})</h2>")) {
            Ok(regex) => Some(Self {
                regex,
                replacement: format!(
                    "<h2 style=\"{}\">${{1}}</h2>",
                    highlight.style.replace('$', "$$")
                ),
            }),
            Err(err) => {
                tracing::warn!(error = %err, "heading highlight pattern rejected, skipping");
                None
            }
        }
    }

    pub(super) fn apply(&self, input: &str) -> String {
        self.regex
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }
}
