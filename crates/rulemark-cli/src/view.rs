use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use rulemark_engine::{Inline, RenderBlock, rendering::blocks::kinds::BulletMarker};

const CODE_BG: Color = Color::Rgb(40, 40, 40);
const CODE_FG: Color = Color::Rgb(220, 220, 220);
const INLINE_CODE_FG: Color = Color::Rgb(230, 200, 120);
const DIM: Color = Color::DarkGray;

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::LightBlue,
        _ => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Maps rendered blocks to styled terminal lines.
///
/// Ordered items are numbered per run, the way a browser numbers
/// consecutive decimal list items.
pub fn document_lines(blocks: &[RenderBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut ordinal = 0;

    for block in blocks {
        if !matches!(block, RenderBlock::OrderedListItem { .. }) {
            ordinal = 0;
        }
        match block {
            RenderBlock::CodeBlock { language, content } => {
                if !language.is_empty() {
                    lines.push(Line::from(Span::styled(
                        language.clone(),
                        Style::default().fg(DIM).add_modifier(Modifier::ITALIC),
                    )));
                }
                let code_style = Style::default().fg(CODE_FG).bg(CODE_BG);
                lines.extend(
                    content
                        .iter()
                        .map(|l| Line::from(Span::styled(format!(" {l} "), code_style))),
                );
            }
            RenderBlock::Heading { level, text } => {
                lines.push(Line::from(Span::styled(text.clone(), heading_style(*level))));
            }
            RenderBlock::BoldParagraph { text } => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            }
            RenderBlock::OrderedListItem { content } => {
                ordinal += 1;
                let mut spans = vec![Span::styled(format!("{ordinal}. "), Style::default().fg(DIM))];
                spans.extend(inline_spans(content, Style::default()));
                lines.push(Line::from(spans));
            }
            RenderBlock::UnorderedListItem {
                indent_level,
                content,
            } => {
                let depth = indent_level.saturating_sub(BulletMarker::BASE_MARGIN)
                    / BulletMarker::MARGIN_PER_INDENT;
                let mut spans = vec![Span::styled(
                    format!("{}• ", " ".repeat(depth)),
                    Style::default().fg(DIM),
                )];
                spans.extend(inline_spans(content, Style::default()));
                lines.push(Line::from(spans));
            }
            RenderBlock::InlineCodeParagraph { content } => {
                lines.push(Line::from(inline_spans(content, Style::default())));
            }
            RenderBlock::BlankSpacer => lines.push(Line::default()),
            RenderBlock::PlainParagraph { text } => lines.push(Line::from(text.clone())),
        }
    }

    lines
}

fn inline_spans(content: &[Inline], base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for inline in content {
        match inline {
            Inline::Text(text) => spans.push(Span::styled(text.clone(), base)),
            Inline::Strong(children) => {
                spans.extend(inline_spans(children, base.add_modifier(Modifier::BOLD)));
            }
            Inline::Code(code) => {
                spans.push(Span::styled(code.clone(), base.fg(INLINE_CODE_FG).bg(CODE_BG)));
            }
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rulemark_engine::render;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn bullets_and_numbers() {
        let lines = document_lines(&render("1. **a**\n2. b\n  - c"));
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(texts, vec!["1. a", "2. b", "  • c"]);
    }

    #[test]
    fn strong_span_is_bold() {
        let lines = document_lines(&render("- **bold** plain"));
        let spans = &lines[0].spans;

        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[2].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn code_inside_strong_keeps_both_styles() {
        let lines = document_lines(&render("- **run `make`**"));
        let code = &lines[0].spans[2];

        assert_eq!(code.content.as_ref(), "make");
        assert!(code.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(code.style.bg, Some(CODE_BG));
    }

    #[test]
    fn code_block_has_caption_and_body() {
        let lines = document_lines(&render("```sh\nls\n```"));
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(texts, vec!["sh", " ls "]);
    }

    #[test]
    fn spacer_is_empty_line() {
        let lines = document_lines(&render("a\n\nb"));

        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans.is_empty());
    }
}
