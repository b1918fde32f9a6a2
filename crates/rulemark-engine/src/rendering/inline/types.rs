/// A structured inline span produced by inline substitution.
///
/// Content is never pre-rendered markup; presentation layers decide how to
/// style and escape each variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text outside any delimiter pair.
    Text(String),
    /// Strong emphasis (`**...**`). May contain code spans.
    Strong(Vec<Inline>),
    /// Inline code (`` `...` ``), rendered monospace. Raw zone: nothing nested.
    Code(String),
}

impl Inline {
    /// The text content with all delimiters removed.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(text) | Inline::Code(text) => text.clone(),
            Inline::Strong(children) => plain_text(children),
        }
    }
}

/// Concatenates the text content of a run of inline spans.
pub fn plain_text(spans: &[Inline]) -> String {
    spans.iter().map(Inline::plain_text).collect()
}
