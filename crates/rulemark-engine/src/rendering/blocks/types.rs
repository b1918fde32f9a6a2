use crate::rendering::inline::Inline;

use super::kinds::BulletMarker;

/// One classified unit of rendered output.
///
/// Every document line outside a code fence produces exactly one block; a
/// closed fence pair and everything between produce one [`RenderBlock::CodeBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBlock {
    /// Lines between a pair of ```` ``` ```` fence markers.
    CodeBlock {
        /// Trimmed text after the opening fence; empty if none was given.
        language: String,
        /// Body lines, verbatim.
        content: Vec<String>,
    },
    /// `# `, `## ` or `### ` heading.
    Heading {
        /// 1, 2 or 3.
        level: u8,
        text: String,
    },
    /// A line wrapped in `**`, delimiters removed.
    BoldParagraph { text: String },
    /// `1. item` with the ordinal removed.
    OrderedListItem { content: Vec<Inline> },
    /// `- item` or `* item`, possibly indented.
    UnorderedListItem {
        /// Left margin in margin units; grows with leading whitespace.
        indent_level: usize,
        content: Vec<Inline>,
    },
    /// A paragraph containing a backtick (and not starting with one), with strong and code spans resolved.
    InlineCodeParagraph { content: Vec<Inline> },
    /// Empty or whitespace-only line; vertical spacing only.
    BlankSpacer,
    /// Anything else, unchanged.
    PlainParagraph { text: String },
}

impl RenderBlock {
    /// Short stable name of the block kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RenderBlock::CodeBlock { .. } => "CodeBlock",
            RenderBlock::Heading { .. } => "Heading",
            RenderBlock::BoldParagraph { .. } => "BoldParagraph",
            RenderBlock::OrderedListItem { .. } => "OrderedListItem",
            RenderBlock::UnorderedListItem { .. } => "UnorderedListItem",
            RenderBlock::InlineCodeParagraph { .. } => "InlineCodeParagraph",
            RenderBlock::BlankSpacer => "BlankSpacer",
            RenderBlock::PlainParagraph { .. } => "PlainParagraph",
        }
    }

    /// Pixel left margin for unordered list items, `None` for other kinds.
    pub fn margin_px(&self) -> Option<usize> {
        match self {
            RenderBlock::UnorderedListItem { indent_level, .. } => {
                Some(indent_level * BulletMarker::PX_PER_UNIT)
            }
            _ => None,
        }
    }
}
