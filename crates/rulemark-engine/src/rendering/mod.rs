pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, RenderBlock};

/// Renders a document into one block per line (fenced regions collapse into one).
///
/// Lines are split on `'\n'` only, so a trailing newline yields a final
/// [`RenderBlock::BlankSpacer`]. Never fails; unrecognised syntax becomes a
/// plain paragraph.
pub fn render(document: &str) -> Vec<RenderBlock> {
    let mut builder = BlockBuilder::new();

    for line in document.split('\n') {
        builder.push(line);
    }

    builder.finish()
}
