use super::{
    kinds::{CodeSpan, Strong},
    types::Inline,
};

/// Parses list items and code-bearing paragraphs into structured [`Inline`] spans.
///
/// Two passes, in order:
/// 1. Strong spans (`**...**`, shortest match) are split out left to right.
/// 2. Code spans (`` `...` ``) are split out of every remaining text run,
///    including the text inside each strong span.
///
/// Unclosed delimiters stay as literal text.
pub fn parse_inline(s: &str) -> Vec<Inline> {
    let mut out = vec![];
    let mut last = 0;

    for caps in Strong::pattern().captures_iter(s) {
        let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.extend(parse_code_spans(&s[last..full.start()]));
        out.push(Inline::Strong(parse_code_spans(inner.as_str())));
        last = full.end();
    }

    out.extend(parse_code_spans(&s[last..]));
    out
}

/// Splits code spans out of a run of text; everything else stays as [`Inline::Text`].
pub fn parse_code_spans(s: &str) -> Vec<Inline> {
    let mut out = vec![];
    let mut last = 0;

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<Inline>, text: &str) {
        if !text.is_empty() {
            out.push(Inline::Text(text.to_string()));
        }
    }

    for caps in CodeSpan::pattern().captures_iter(s) {
        let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        flush_text(&mut out, &s[last..full.start()]);
        out.push(Inline::Code(inner.as_str().to_string()));
        last = full.end();
    }

    flush_text(&mut out, &s[last..]);
    out
}
