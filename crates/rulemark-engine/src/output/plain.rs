use crate::rendering::{
    blocks::{RenderBlock, kinds::BulletMarker},
    inline::plain_text,
};

/// Renders blocks as markup-free text, one output line per block line.
///
/// Bullets keep their original leading-whitespace width, ordered items are
/// numbered from 1 in each run, and code lines are indented four spaces.
pub fn to_plain_text(blocks: &[RenderBlock]) -> String {
    let mut lines: Vec<String> = vec![];
    let mut ordinal = 0;

    for block in blocks {
        if !matches!(block, RenderBlock::OrderedListItem { .. }) {
            ordinal = 0;
        }
        match block {
            RenderBlock::CodeBlock { content, .. } => {
                lines.extend(content.iter().map(|l| format!("    {l}")));
            }
            RenderBlock::Heading { text, .. }
            | RenderBlock::BoldParagraph { text }
            | RenderBlock::PlainParagraph { text } => lines.push(text.clone()),
            RenderBlock::OrderedListItem { content } => {
                ordinal += 1;
                lines.push(format!("{ordinal}. {}", plain_text(content)));
            }
            RenderBlock::UnorderedListItem {
                indent_level,
                content,
            } => {
                let depth = indent_level.saturating_sub(BulletMarker::BASE_MARGIN)
                    / BulletMarker::MARGIN_PER_INDENT;
                lines.push(format!("{}• {}", " ".repeat(depth), plain_text(content)));
            }
            RenderBlock::InlineCodeParagraph { content } => lines.push(plain_text(content)),
            RenderBlock::BlankSpacer => lines.push(String::new()),
        }
    }

    lines.join("\n")
}
