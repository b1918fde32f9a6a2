use super::{classify::MarkdownLineClassifier, kinds::CodeFence, types::RenderBlock};

#[derive(Debug, Clone, PartialEq, Eq)]
enum FenceState {
    Outside,
    Inside { language: String, lines: Vec<String> },
}

/// Single-pass state machine turning lines into [`RenderBlock`]s.
///
/// The only state carried between lines is whether a code fence is open and
/// the lines buffered inside it.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    fence: FenceState,
    out: Vec<RenderBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            fence: FenceState::Outside,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        if let Some(language) = CodeFence::sig(line) {
            self.toggle_fence(language);
            return;
        }

        if let FenceState::Inside { lines, .. } = &mut self.fence {
            lines.push(line.to_string());
            return;
        }

        self.out.push(self.classifier.classify(line));
    }

    /// Returns the blocks. An unterminated fence's buffered lines are dropped.
    pub fn finish(self) -> Vec<RenderBlock> {
        if let FenceState::Inside { language, lines } = &self.fence {
            log::debug!(
                "dropping unterminated code fence (language {language:?}, {} buffered lines)",
                lines.len()
            );
        }
        self.out
    }

    fn toggle_fence(&mut self, language: &str) {
        match std::mem::replace(&mut self.fence, FenceState::Outside) {
            FenceState::Outside => {
                self.fence = FenceState::Inside {
                    language: language.to_string(),
                    lines: vec![],
                };
            }
            FenceState::Inside { language, lines } => {
                self.out.push(RenderBlock::CodeBlock {
                    language,
                    content: lines,
                });
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
