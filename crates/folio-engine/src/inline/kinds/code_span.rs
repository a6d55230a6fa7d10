use std::sync::OnceLock;

use regex::Regex;

use crate::model::Span;

use super::InlineMatch;

/// Inline code: `` `text` ``. Single backticks only; content may not be empty.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    pub fn find(s: &str) -> Option<InlineMatch> {
        if !s.contains(Self::TICK) {
            return None;
        }
        static CODE: OnceLock<Regex> = OnceLock::new();
        let code = CODE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"));

        let caps = code.captures(s)?;
        let full = caps.get(0)?;
        Some(InlineMatch {
            start: full.start(),
            end: full.end(),
            span: Span::InlineCode(caps[1].to_string()),
        })
    }
}
