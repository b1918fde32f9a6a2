use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_safe};

use crate::rendering::{blocks::RenderBlock, inline::Inline};

/// Renders blocks as an HTML fragment, one element per line.
///
/// All document text is escaped, so documents loaded from disk are safe to embed.
pub fn to_html(blocks: &[RenderBlock]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &RenderBlock) {
    // Writing to a String cannot fail
    let _ = match block {
        RenderBlock::CodeBlock { language, content } => {
            let body = encode_safe(&content.join("\n")).into_owned();
            if language.is_empty() {
                write!(out, "<pre><code>{body}</code></pre>")
            } else {
                let class = encode_double_quoted_attribute(language);
                write!(out, "<pre><code class=\"language-{class}\">{body}</code></pre>")
            }
        }
        RenderBlock::Heading { level, text } => {
            write!(out, "<h{level}>{}</h{level}>", encode_safe(text))
        }
        RenderBlock::BoldParagraph { text } => {
            write!(out, "<p class=\"bold\">{}</p>", encode_safe(text))
        }
        RenderBlock::OrderedListItem { content } => {
            write!(out, "<li class=\"ordered\">{}</li>", inline_html(content))
        }
        RenderBlock::UnorderedListItem { content, .. } => write!(
            out,
            "<li class=\"unordered\" style=\"margin-left: {}px\">{}</li>",
            block.margin_px().unwrap_or_default(),
            inline_html(content)
        ),
        RenderBlock::InlineCodeParagraph { content } => {
            write!(out, "<p class=\"inline-code\">{}</p>", inline_html(content))
        }
        RenderBlock::BlankSpacer => write!(out, "<div class=\"spacer\"></div>"),
        RenderBlock::PlainParagraph { text } => write!(out, "<p>{}</p>", encode_safe(text)),
    };
}

/// Renders inline spans as `<strong>` / `<code>` markup with escaped text.
pub fn inline_html(spans: &[Inline]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Inline::Text(text) => out.push_str(&encode_safe(text)),
            Inline::Strong(children) => {
                out.push_str("<strong>");
                out.push_str(&inline_html(children));
                out.push_str("</strong>");
            }
            Inline::Code(code) => {
                out.push_str("<code>");
                out.push_str(&encode_safe(code));
                out.push_str("</code>");
            }
        }
    }
    out
}
