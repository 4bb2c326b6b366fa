//! The ordered rule table.

use super::{block, code, inline};
use crate::TransformOptions;

/// One step of the transducer.
///
/// Stages run in the order of [`Stage::ALL`]; each one sees the cumulative
/// output of the stages before it, including markup emitted for fenced code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Headings,
    Bold,
    Italic,
    FencedCode,
    InlineCode,
    Lists,
    Links,
    Images,
    Blockquotes,
    Paragraphs,
    ListMerge,
    LineBreaks,
}

impl Stage {
    /// Every stage, in application order.
    pub const ALL: [Stage; 12] = [
        Stage::Headings,
        Stage::Bold,
        Stage::Italic,
        Stage::FencedCode,
        Stage::InlineCode,
        Stage::Lists,
        Stage::Links,
        Stage::Images,
        Stage::Blockquotes,
        Stage::Paragraphs,
        Stage::ListMerge,
        Stage::LineBreaks,
    ];

    /// 1-based position in the application sequence.
    pub fn position(self) -> usize {
        self as usize + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Headings => "headings",
            Stage::Bold => "bold",
            Stage::Italic => "italic",
            Stage::FencedCode => "fenced-code",
            Stage::InlineCode => "inline-code",
            Stage::Lists => "lists",
            Stage::Links => "links",
            Stage::Images => "images",
            Stage::Blockquotes => "blockquotes",
            Stage::Paragraphs => "paragraphs",
            Stage::ListMerge => "list-merge",
            Stage::LineBreaks => "line-breaks",
        }
    }

    /// Regex patterns matched by this stage, in the order they are applied.
    ///
    /// Every returned pattern compiles with [`regex::Regex`]. The paragraph
    /// stage is a line scan and has none.
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Stage::Headings => &block::HEADING_PATTERNS,
            Stage::Bold => &inline::BOLD_PATTERNS,
            Stage::Italic => &inline::ITALIC_PATTERNS,
            Stage::FencedCode => &[code::FENCE_PATTERN],
            Stage::InlineCode => &[inline::INLINE_CODE_PATTERN],
            Stage::Lists => &block::LIST_PATTERNS,
            Stage::Links => &[inline::LINK_PATTERN],
            Stage::Images => &[inline::IMAGE_PATTERN],
            Stage::Blockquotes => &[block::BLOCKQUOTE_PATTERN],
            Stage::Paragraphs => &[],
            Stage::ListMerge => &block::LIST_MERGE_PATTERNS,
            Stage::LineBreaks => &[r"\n"],
        }
    }

    pub(crate) fn apply(self, input: &str, options: &TransformOptions) -> String {
        match self {
            Stage::Headings => block::headings(input),
            Stage::Bold => inline::bold(input),
            Stage::Italic => inline::italic(input),
            Stage::FencedCode => code::fenced_blocks(input),
            Stage::InlineCode => inline::inline_code(input),
            Stage::Lists => block::lists(input),
            Stage::Links => inline::links(input, options.link_style.as_deref()),
            Stage::Images => inline::images(input),
            Stage::Blockquotes => block::blockquotes(input),
            Stage::Paragraphs => block::paragraphs(input),
            Stage::ListMerge => block::merge_lists(input),
            Stage::LineBreaks => input.replace('\n', "<br />"),
        }
    }
}
