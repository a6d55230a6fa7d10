pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::Link;

use crate::model::Span;

/// A construct found in the remaining text, with byte offsets relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Start of the opening delimiter.
    pub start: usize,
    /// End of the closing delimiter.
    pub end: usize,
    /// The span with delimiters removed.
    pub span: Span,
}
