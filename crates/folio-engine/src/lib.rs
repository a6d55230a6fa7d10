//! Markup pipeline for Folio.
//!
//! Raw text from the content backend (HTML fragments or loose Markdown)
//! flows strictly forward:
//!
//! ```text
//! raw text -> normalize -> blocks::classify -> Document -> Block::spans -> renderer
//! ```
//!
//! Every stage is a pure, total function: any string produces a document.

pub mod blocks;
pub mod inline;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export key types for easier usage
pub use blocks::classify;
pub use inline::tokenize;
pub use model::{Block, Document, Span};
pub use normalize::{EntityTable, HtmlNormalizer, normalize};

/// Normalizes and classifies `text` with the builtin entity table.
pub fn render_document(text: &str) -> Document {
    Document::new(classify(&normalize(text)))
}

/// Like [`render_document`], with a caller-supplied normalizer.
pub fn render_document_with(normalizer: &HtmlNormalizer, text: &str) -> Document {
    Document::new(classify(&normalizer.normalize(text)))
}
