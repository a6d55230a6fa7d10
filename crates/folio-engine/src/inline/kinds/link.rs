use std::sync::OnceLock;

use regex::Regex;

use crate::model::Span;

use super::InlineMatch;

/// Markdown link `[label](target)`.
///
/// Only the label survives tokenization; the target is dropped.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';

    pub fn find(s: &str) -> Option<InlineMatch> {
        if !s.contains(Self::OPEN) {
            return None;
        }
        static LINK: OnceLock<Regex> = OnceLock::new();
        let link = LINK
            .get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]*)\)").expect("Invalid link regex"));

        let caps = link.captures(s)?;
        let full = caps.get(0)?;
        Some(InlineMatch {
            start: full.start(),
            end: full.end(),
            span: Span::LinkText(caps[1].to_string()),
        })
    }
}
