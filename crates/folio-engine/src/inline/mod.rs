//! # Inline Tokenization
//!
//! Splits the text of paragraphs, list items and quotes into styled spans.
//!
//! ## Architecture
//!
//! Each construct owns its delimiter knowledge in `kinds` and exposes a `find`
//! that reports its leftmost occurrence in a string. The parser repeatedly
//! asks every finder, keeps the leftmost result and resumes after it.
//!
//! ## Modules
//!
//! - **`kinds`**: `Bold`, `Italic`, `CodeSpan`, `Link` finders
//! - **`cursor`**: byte `Cursor` used for delimiter-adjacency checks
//! - **`parser`**: `tokenize()` main entry point
//!
//! ## Precedence
//!
//! Leftmost match wins. When two constructs start at the same byte the
//! priority is bold, italic, inline code, link. Emphasis is one level deep:
//! markers inside a matched span are kept verbatim.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::tokenize;
