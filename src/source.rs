//! Content sources: the rendering surfaces that display generated text.
//!
//! Each surface pairs the shared transducer with its own options and
//! sanitize policy, and has its own print template.

use crate::converter::MarkdownToHtml;
use crate::core::document::{PrintDocument, PrintSection};
use crate::sanitize::{sanitize, SanitizePolicy, SanitizedFragment};
use crate::{Error, HeadingHighlight, Result, TransformOptions};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

const LINK_STYLE: &str = "color: #60a5fa; text-decoration: underline;";
const RESOURCE_HEADING_STYLE: &str = "color: #93c5fd;";
const RESOURCE_HEADINGS: [&str; 7] = [
    "Online Courses",
    "Tutorials",
    "Books",
    "YouTube",
    "Community",
    "Resources",
    "Free Resources",
];
const LINKED_PRINT_CSS: &str =
    "h1, h2, h3 { color: #333; }\na { color: #0066cc !important; text-decoration: underline !important; }";
const UNKNOWN_FILE: &str = "Unknown file";

/// A rendering surface for generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSource {
    /// Notes generated from a video URL.
    Notes,
    /// Analysis of an uploaded document.
    DocumentSummary,
    /// Learning roadmap for a topic.
    Roadmap,
    /// Questions generated from an uploaded document.
    QuestionBank,
}

impl ContentSource {
    pub const ALL: [ContentSource; 4] = [
        ContentSource::Notes,
        ContentSource::DocumentSummary,
        ContentSource::Roadmap,
        ContentSource::QuestionBank,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContentSource::Notes => "notes",
            ContentSource::DocumentSummary => "document-summary",
            ContentSource::Roadmap => "roadmap",
            ContentSource::QuestionBank => "question-bank",
        }
    }

    pub fn policy(self) -> SanitizePolicy {
        match self {
            ContentSource::Notes => SanitizePolicy::notes(),
            ContentSource::DocumentSummary => SanitizePolicy::document_summary(),
            ContentSource::Roadmap => SanitizePolicy::roadmap(),
            ContentSource::QuestionBank => SanitizePolicy::question_bank(),
        }
    }

    pub fn transform_options(self) -> TransformOptions {
        match self {
            ContentSource::Notes | ContentSource::DocumentSummary => TransformOptions::default(),
            ContentSource::Roadmap => TransformOptions {
                link_style: Some(LINK_STYLE.to_string()),
                heading_highlight: Some(HeadingHighlight {
                    titles: RESOURCE_HEADINGS.iter().map(|t| t.to_string()).collect(),
                    style: RESOURCE_HEADING_STYLE.to_string(),
                }),
            },
            ContentSource::QuestionBank => TransformOptions {
                link_style: Some(LINK_STYLE.to_string()),
                heading_highlight: None,
            },
        }
    }

    /// This surface's converter, built once per process.
    pub fn converter(self) -> &'static MarkdownToHtml {
        static CONVERTERS: [OnceLock<MarkdownToHtml>; 4] =
            [OnceLock::new(), OnceLock::new(), OnceLock::new(), OnceLock::new()];
        CONVERTERS[self as usize].get_or_init(|| MarkdownToHtml::new(self.transform_options()))
    }

    /// Transforms and sanitizes text for live display on this surface.
    pub fn render<'a>(self, text: impl Into<Option<&'a str>>) -> SanitizedFragment {
        self.render_with(text, &self.policy())
    }

    /// Like [`ContentSource::render`] with a caller-supplied policy.
    pub fn render_with<'a>(
        self,
        text: impl Into<Option<&'a str>>,
        policy: &SanitizePolicy,
    ) -> SanitizedFragment {
        sanitize(&self.converter().convert(text), policy)
    }

    fn print_title(self) -> &'static str {
        match self {
            ContentSource::Notes => "YouTube Notes",
            ContentSource::DocumentSummary => "Document Analysis",
            ContentSource::Roadmap => "Learning Roadmap",
            ContentSource::QuestionBank => "Question Bank",
        }
    }

    fn print_footer(self) -> &'static str {
        match self {
            ContentSource::Notes => "Generated via YouTube Notes Generator",
            ContentSource::DocumentSummary => "Generated via Document Analysis Tool",
            ContentSource::Roadmap => "Generated via Learning Roadmap Generator",
            ContentSource::QuestionBank => "Generated via Question Bank Generator",
        }
    }

    fn attribution(self, subject: Option<&str>) -> Option<String> {
        let subject = subject.map(str::trim).filter(|s| !s.is_empty());
        match self {
            ContentSource::Notes => Some(format!("Source: {}", subject.unwrap_or_default())),
            ContentSource::DocumentSummary => {
                Some(format!("File: {}", subject.unwrap_or(UNKNOWN_FILE)))
            }
            ContentSource::QuestionBank => {
                Some(format!("Generated from: {}", subject.unwrap_or(UNKNOWN_FILE)))
            }
            ContentSource::Roadmap => None,
        }
    }

    /// Builds this surface's print document for a single markdown body.
    ///
    /// `subject` is the video URL for notes, the file name for summaries and
    /// question banks, and the topic for a roadmap.
    pub fn print_document(self, subject: Option<&str>, body_markdown: &str) -> PrintDocument {
        if self == ContentSource::Roadmap {
            let roadmap = Roadmap {
                topic: subject.unwrap_or_default().to_string(),
                overview: body_markdown.to_string(),
                ..Default::default()
            };
            return roadmap.print_document();
        }

        let mut document = PrintDocument::new(self.print_title()).with_footer(self.print_footer());
        document.attribution = self.attribution(subject);
        document.push_section(PrintSection::from_markdown(
            None,
            body_markdown,
            self.converter(),
            &self.policy(),
        ));
        if self.links_styled_in_print() {
            document = document.with_extra_css(LINKED_PRINT_CSS);
        }
        document
    }

    fn links_styled_in_print(self) -> bool {
        matches!(self, ContentSource::Roadmap | ContentSource::QuestionBank)
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "notes" => Ok(ContentSource::Notes),
            "summary" | "document-summary" => Ok(ContentSource::DocumentSummary),
            "roadmap" => Ok(ContentSource::Roadmap),
            "question-bank" | "questions" => Ok(ContentSource::QuestionBank),
            _ => Err(Error::UnknownSource(s.to_string())),
        }
    }
}

/// A generated learning roadmap, as returned by the generation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Roadmap {
    pub topic: String,
    pub overview: String,
    pub learning_stages: String,
    pub recommended_resources: String,
    pub learning_projects: String,
}

impl Roadmap {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Sections in display order as `(heading, markdown)`.
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            ("Overview", self.overview.as_str()),
            ("Learning Stages", self.learning_stages.as_str()),
            ("Recommended Resources", self.recommended_resources.as_str()),
            ("Learning Projects", self.learning_projects.as_str()),
        ]
    }

    /// Builds the multi-section roadmap print document.
    pub fn print_document(&self) -> PrintDocument {
        let source = ContentSource::Roadmap;
        let converter = source.converter();
        let policy = source.policy();

        let title = format!("{} Learning Roadmap", self.topic.trim())
            .trim_start()
            .to_string();
        let mut document = PrintDocument::new(title)
            .with_title_style("text-align: center; margin-bottom: 20px;")
            .with_footer(source.print_footer())
            .with_extra_css(LINKED_PRINT_CSS);

        for (heading, markdown) in self.sections() {
            let section =
                PrintSection::from_markdown(Some(heading), markdown, converter, &policy);
            let section = if heading == "Recommended Resources" {
                section.with_heading_style("color: #60a5fa;")
            } else {
                section
            };
            document.push_section(section);
        }
        document
    }
}
