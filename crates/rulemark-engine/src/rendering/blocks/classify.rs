use crate::rendering::inline::{kinds::CodeSpan, parse_inline};

use super::{
    kinds::{BoldParagraph, BulletMarker, Heading, OrderedMarker},
    types::RenderBlock,
};

/// Classifies a single line that lies outside any code fence.
///
/// Each line is classified independently; fence tracking is the
/// [`BlockBuilder`](super::BlockBuilder)'s job.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`RenderBlock`]. First match wins:
    ///
    /// 1. heading (`# `, `## `, `### `)
    /// 2. whole-line bold (`**...**`, longer than four bytes)
    /// 3. ordered list item (`1. `)
    /// 4. unordered list item (`- ` / `* `, optionally indented)
    /// 5. paragraph with inline spans (contains a backtick, does not start with one)
    /// 6. blank spacer (empty or whitespace only)
    /// 7. plain paragraph
    pub fn classify(&self, line: &str) -> RenderBlock {
        if let Some((level, text)) = Heading::strip(line) {
            return RenderBlock::Heading {
                level,
                text: text.to_string(),
            };
        }

        if let Some(text) = BoldParagraph::strip(line) {
            return RenderBlock::BoldParagraph {
                text: text.to_string(),
            };
        }

        if let Some(item) = OrderedMarker::strip(line) {
            return RenderBlock::OrderedListItem {
                content: parse_inline(item),
            };
        }

        if let Some((indent, item)) = BulletMarker::strip(line) {
            return RenderBlock::UnorderedListItem {
                indent_level: BulletMarker::indent_level(indent),
                content: parse_inline(item),
            };
        }

        if line.contains(CodeSpan::TICK) && !line.starts_with(CodeSpan::TICK) {
            return RenderBlock::InlineCodeParagraph {
                content: parse_inline(line),
            };
        }

        if line.trim().is_empty() {
            return RenderBlock::BlankSpacer;
        }

        RenderBlock::PlainParagraph {
            text: line.to_string(),
        }
    }
}
