use crate::model::Block;

use super::classify::{LineClass, MarkupLineClassifier};

#[derive(Debug, Clone, Default)]
enum FenceState {
    #[default]
    Normal,
    InFence {
        language: String,
        buffer: Vec<String>,
    },
}

/// Turns classified lines into blocks, one forward pass.
///
/// The only state carried between lines is whether a code fence is open.
pub struct BlockBuilder {
    classifier: MarkupLineClassifier,
    fence: FenceState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkupLineClassifier,
            fence: FenceState::Normal,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if let Some(sig) = c.fence_sig {
            self.toggle_fence(sig.info);
            return;
        }

        if let FenceState::InFence { buffer, .. } = &mut self.fence {
            buffer.push(c.text.to_string());
            return;
        }

        if c.is_blank {
            self.out.push(Block::Spacer);
            return;
        }

        self.out.push(self.classifier.leaf_block(c));
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if let FenceState::InFence { language, buffer } = std::mem::take(&mut self.fence)
            && !buffer.is_empty()
        {
            log::debug!(
                "flushing unclosed fence ({} lines, language {language:?})",
                buffer.len()
            );
            self.out.push(Block::Code {
                text: buffer.join("\n"),
                language,
            });
        }
        self.out
    }

    fn toggle_fence(&mut self, info: &str) {
        match std::mem::take(&mut self.fence) {
            FenceState::Normal => {
                self.fence = FenceState::InFence {
                    language: info.to_string(),
                    buffer: vec![],
                };
            }
            FenceState::InFence { language, buffer } => {
                self.out.push(Block::Code {
                    text: buffer.join("\n"),
                    language,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn build(lines: &[&str]) -> Vec<Block> {
        let classifier = MarkupLineClassifier;
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(&classifier.classify(line));
        }
        builder.finish()
    }

    #[test]
    fn closed_fence_flushes_code() {
        let blocks = build(&["```sh", "ls", "", "pwd", "```"]);
        assert_eq!(
            blocks,
            vec![Block::Code {
                text: "ls\n\npwd".into(),
                language: "sh".into()
            }]
        );
    }

    #[test]
    fn empty_fence_pair_yields_empty_code() {
        assert_eq!(
            build(&["```", "```"]),
            vec![Block::Code {
                text: String::new(),
                language: String::new()
            }]
        );
    }

    #[test]
    fn unclosed_empty_fence_yields_nothing() {
        assert_eq!(build(&["before", "```rust"]), vec![Block::Paragraph {
            text: "before".into()
        }]);
    }

    #[test]
    fn fence_content_is_not_classified() {
        let blocks = build(&["```", "# not a heading", "- not a list", "```"]);
        assert_eq!(
            blocks,
            vec![Block::Code {
                text: "# not a heading\n- not a list".into(),
                language: String::new()
            }]
        );
    }

    #[test]
    fn closing_marker_info_is_ignored() {
        let blocks = build(&["```py", "x", "```trailing"]);
        assert_eq!(
            blocks,
            vec![Block::Code {
                text: "x".into(),
                language: "py".into()
            }]
        );
    }

    #[test]
    fn blank_lines_are_spacers() {
        assert_eq!(
            build(&["a", "", "   ", "b"]),
            vec![
                Block::Paragraph { text: "a".into() },
                Block::Spacer,
                Block::Spacer,
                Block::Paragraph { text: "b".into() },
            ]
        );
    }
}
