//! # Document Model
//!
//! The vocabulary shared between the pipeline and whatever renders its output.
//! A [`Document`] is built once per render pass from a string snapshot and is
//! never mutated afterwards; re-rendering streamed text means building a new one.

use serde::Serialize;

use crate::inline;

/// An ordered sequence of blocks, mirroring source line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// A top-level structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A heading; `level` is always within 1..=4.
    Heading { text: String, level: u8 },
    /// Raw paragraph text. Spans are resolved lazily via [`Block::spans`].
    Paragraph { text: String },
    /// A list item. `index` is the parsed ordinal for ordered items and 0 otherwise.
    ListItem {
        text: String,
        ordered: bool,
        index: u32,
    },
    Quote { text: String },
    /// Verbatim lines between fences, joined with `\n`.
    Code { text: String, language: String },
    /// Horizontal rule.
    Divider,
    /// A blank source line. Rendered as vertical space.
    Spacer,
}

impl Block {
    /// Text carried by the block, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::ListItem { text, .. }
            | Block::Quote { text }
            | Block::Code { text, .. } => Some(text),
            Block::Divider | Block::Spacer => None,
        }
    }

    /// Whether the renderer resolves inline spans for this block.
    pub fn is_inline_eligible(&self) -> bool {
        matches!(
            self,
            Block::Paragraph { .. } | Block::ListItem { .. } | Block::Quote { .. }
        )
    }

    /// Tokenizes the block text into spans.
    ///
    /// Returns `None` for blocks that are not inline-eligible (headings, code,
    /// dividers and spacers).
    pub fn spans(&self) -> Option<Vec<Span>> {
        match self {
            Block::Paragraph { text } | Block::ListItem { text, .. } | Block::Quote { text } => {
                Some(inline::tokenize(text))
            }
            _ => None,
        }
    }
}

/// An inline styled run of text within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    PlainText(String),
    Bold(String),
    Italic(String),
    InlineCode(String),
    /// Visible label of a `[label](target)` link. The target is not kept.
    LinkText(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::PlainText(t)
            | Span::Bold(t)
            | Span::Italic(t)
            | Span::InlineCode(t)
            | Span::LinkText(t) => t,
        }
    }
}
