use crate::model::Block;

use super::{
    kinds::{CodeFence, FenceSig},
    open::try_open_leaf,
};

/// Local facts about a single line, gathered without looking at its neighbours.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line as written, minus any trailing `\r`.
    pub text: &'a str,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Set when the line is a fence marker.
    pub fence_sig: Option<FenceSig<'a>>,
}

/// Classifies individual lines for the block builder.
pub struct MarkupLineClassifier;

impl MarkupLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.trim_end_matches('\r');
        LineClass {
            text,
            is_blank: text.trim().is_empty(),
            fence_sig: CodeFence::sig(text),
        }
    }

    /// Resolves a non-blank line outside a fence into its block.
    pub fn leaf_block(&self, class: &LineClass<'_>) -> Block {
        try_open_leaf(class.text.trim_start()).unwrap_or_else(|| Block::Paragraph {
            text: class.text.to_string(),
        })
    }
}
