use pretty_assertions::assert_eq;
use rulemark_engine::{Inline, RenderBlock, RuleVariant, render, to_html, to_plain_text};

#[test]
fn claude_rules_structure() {
    let blocks = render(RuleVariant::Claude.document());

    let headings: Vec<&str> = blocks
        .iter()
        .filter_map(|b| match b {
            RenderBlock::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        headings,
        vec![
            "Archon-First Workflow (Claude)",
            "Daily Flow",
            "Claude Integration Notes",
            "Research Expectations",
        ]
    );
}

#[test]
fn builtin_documents_map_every_line_to_a_block() {
    // Neither document has a fence, so every line is a block
    for variant in RuleVariant::ALL {
        let document = variant.document();
        assert_eq!(
            render(document).len(),
            document.split('\n').count(),
            "{variant}"
        );
    }
}

#[test]
fn universal_rules_ordered_items_carry_strong_spans() {
    let blocks = render(RuleVariant::Universal.document());

    let first_item = blocks
        .iter()
        .find_map(|b| match b {
            RenderBlock::OrderedListItem { content } => Some(content),
            _ => None,
        })
        .expect("universal rules contain an ordered list");

    assert_eq!(
        first_item[0],
        Inline::Strong(vec![Inline::Text("Review Tasks".to_string())])
    );
}

#[test]
fn bullet_with_code_span_from_claude_rules() {
    let blocks = render(RuleVariant::Claude.document());

    assert!(blocks.contains(&RenderBlock::UnorderedListItem {
        indent_level: 6,
        content: vec![
            Inline::Text("Claude has network access to ".to_string()),
            Inline::Code("http://127.0.0.1:8181".to_string()),
            Inline::Text(" for REST calls".to_string()),
        ],
    }));
}

#[test]
fn user_supplied_document_is_escaped_in_html() {
    let doc = "# <img src=x onerror=alert(1)>\n- **<b>hi</b>**";
    let html = to_html(&render(doc));

    assert!(!html.contains("<img"));
    assert!(!html.contains("<b>"));
}

#[test]
fn plain_text_of_universal_rules_has_no_markers() {
    let text = to_plain_text(&render(RuleVariant::Universal.document()));

    assert!(text.starts_with("Core Archon Workflow"));
    assert!(!text.contains("**"));
    assert!(!text.contains("## "));
}
