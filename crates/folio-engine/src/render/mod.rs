//! Reference renderers.
//!
//! Platform renderers map blocks and spans to their own styles; these two
//! cover the cases the engine's own tools need (search text and HTML export).

pub mod html;
pub mod plain;

pub use html::to_html;
pub use plain::{flatten, to_plain_text};
