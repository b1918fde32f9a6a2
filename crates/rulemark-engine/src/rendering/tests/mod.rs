//! Behavioural tests for the renderer as a whole.
//!
//! Per-kind matching is covered next to each kind; these tests pin down the
//! properties that only show up across whole documents.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::rendering::{blocks::RenderBlock, inline::Inline, render};
use crate::rules::RuleVariant;

fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

#[test]
fn fence_round_trip() {
    assert_eq!(
        render("```go\nfoo\nbar\n```"),
        vec![RenderBlock::CodeBlock {
            language: "go".to_string(),
            content: vec!["foo".to_string(), "bar".to_string()],
        }]
    );
}

/// An unterminated fence swallows the rest of the document, trailing empty line included.
#[test]
fn unterminated_fence_drops_region() {
    assert!(render("```go\nfoo\n").is_empty());
}

#[test]
fn heading_precedence() {
    assert_eq!(
        render("### Title"),
        vec![RenderBlock::Heading {
            level: 3,
            text: "Title".to_string()
        }]
    );
}

#[rstest]
#[case("**Hi**", RenderBlock::BoldParagraph { text: "Hi".to_string() })]
#[case("****", RenderBlock::PlainParagraph { text: "****".to_string() })]
fn bold_paragraph_boundary(#[case] doc: &str, #[case] expected: RenderBlock) {
    assert_eq!(render(doc), vec![expected]);
}

#[test]
fn ordered_list_inline_substitution() {
    assert_eq!(
        render("1. Use `code` and **bold**"),
        vec![RenderBlock::OrderedListItem {
            content: vec![
                text("Use "),
                Inline::Code("code".to_string()),
                text(" and "),
                Inline::Strong(vec![text("bold")]),
            ]
        }]
    );
}

#[test]
fn indent_scaling() {
    let blocks = render("- top\n  - nested\n    - deeper");
    let levels: Vec<usize> = blocks
        .iter()
        .map(|b| match b {
            RenderBlock::UnorderedListItem { indent_level, .. } => *indent_level,
            other => panic!("expected bullet, got {other:?}"),
        })
        .collect();

    assert_eq!(levels, vec![6, 10, 14]);
    assert!(levels.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(blocks[1].margin_px(), Some(40));
}

#[test]
fn render_is_idempotent() {
    for variant in RuleVariant::ALL {
        assert_eq!(render(variant.document()), render(variant.document()));
    }
}

#[rstest]
#[case("")]
#[case("one line")]
#[case("a\n\nb\n")]
#[case("# h\n```\nx\ny\n```\n- z")]
#[case("```a\n```\n```b\n1\n```")]
fn line_coverage(#[case] doc: &str) {
    let n = doc.split('\n').count();
    let blocks = render(doc);

    let code_blocks: Vec<usize> = blocks
        .iter()
        .filter_map(|b| match b {
            RenderBlock::CodeBlock { content, .. } => Some(content.len()),
            _ => None,
        })
        .collect();
    // Each closed fence absorbs its two markers plus its body into one block.
    let absorbed: usize = code_blocks.iter().map(|body| body + 2).sum();

    assert_eq!(blocks.len(), n - absorbed + code_blocks.len());
}

#[test]
fn empty_document_is_one_spacer() {
    assert_eq!(render(""), vec![RenderBlock::BlankSpacer]);
}

#[test]
fn trailing_newline_adds_spacer() {
    assert_eq!(
        render("hello\n"),
        vec![
            RenderBlock::PlainParagraph {
                text: "hello".to_string()
            },
            RenderBlock::BlankSpacer,
        ]
    );
}

#[test]
fn carriage_returns_are_kept() {
    assert_eq!(
        render("# Title\r"),
        vec![RenderBlock::Heading {
            level: 1,
            text: "Title\r".to_string()
        }]
    );
}

#[test]
fn mixed_document_in_order() {
    let doc = "# Core\n\nIntro text\n**Note**\n1. **Review** tasks\n- Use `uv run`\nRun `make` now";
    let kinds: Vec<&str> = render(doc).iter().map(RenderBlock::kind_name).collect();
    assert_eq!(
        kinds,
        vec![
            "Heading",
            "BlankSpacer",
            "PlainParagraph",
            "BoldParagraph",
            "OrderedListItem",
            "UnorderedListItem",
            "InlineCodeParagraph",
        ]
    );
}
