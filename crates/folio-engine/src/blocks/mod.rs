//! # Block Classification
//!
//! Two-phase line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is reduced to a `LineClass`
//!    holding local facts (blank status, fence marker)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks whether a code
//!    fence is open and emits one `Block` per line outside fences, and one
//!    `Block::Code` per fenced region
//!
//! ## Modules
//!
//! - **`kinds`**: per-block marker knowledge (headings, list items, quotes, fences, dividers)
//! - **`open`**: `try_open_leaf` dispatch in precedence order
//! - **`classify`**: `MarkupLineClassifier`
//! - **`builder`**: `BlockBuilder` fence state machine
//!
//! ## Key Invariants
//!
//! - Fenced code is a raw zone: interior lines are kept verbatim, blank lines included
//! - Blank lines become `Spacer` and are never merged into neighbours
//! - An unclosed fence is flushed as a final `Code` block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkupLineClassifier};

use crate::model::Block;

/// Classifies normalized text into an ordered block sequence.
pub fn classify(text: &str) -> Vec<Block> {
    let classifier = MarkupLineClassifier;
    text.lines()
        .fold(BlockBuilder::new(), |mut builder, line| {
            builder.push(&classifier.classify(line));
            builder
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn mixed_document() {
        let text = "# Lesson 1\n\nIntro text\n- point\n2. second\n> wise words\n---\n```rust\nfn main() {}\n```";
        assert_eq!(
            classify(text),
            vec![
                Block::Heading {
                    text: "Lesson 1".into(),
                    level: 1
                },
                Block::Spacer,
                Block::Paragraph {
                    text: "Intro text".into()
                },
                Block::ListItem {
                    text: "point".into(),
                    ordered: false,
                    index: 0
                },
                Block::ListItem {
                    text: "second".into(),
                    ordered: true,
                    index: 2
                },
                Block::Quote {
                    text: "wise words".into()
                },
                Block::Divider,
                Block::Code {
                    text: "fn main() {}".into(),
                    language: "rust".into()
                },
            ]
        );
    }

    #[test]
    fn crlf_lines_are_accepted() {
        assert_eq!(
            classify("## Title\r\nbody\r\n"),
            vec![
                Block::Heading {
                    text: "Title".into(),
                    level: 2
                },
                Block::Paragraph {
                    text: "body".into()
                },
            ]
        );
    }
}
