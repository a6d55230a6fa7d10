use std::sync::OnceLock;

use regex::Regex;

use crate::inline::cursor::Cursor;
use crate::model::Span;

use super::InlineMatch;

/// Strong emphasis: `**text**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";

    pub fn find(s: &str) -> Option<InlineMatch> {
        static BOLD: OnceLock<Regex> = OnceLock::new();
        let bold = BOLD.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"));

        let caps = bold.captures(s)?;
        let full = caps.get(0)?;
        Some(InlineMatch {
            start: full.start(),
            end: full.end(),
            span: Span::Bold(caps[1].to_string()),
        })
    }
}

/// Emphasis: `*text*` or `_text_` with single delimiters.
///
/// A delimiter touching another copy of itself belongs to `**` and is never
/// an italic delimiter. The closing delimiter must match the opening one.
pub struct Italic;

impl Italic {
    pub const DELIMITERS: [u8; 2] = [b'*', b'_'];

    pub fn find(s: &str) -> Option<InlineMatch> {
        let mut cur = Cursor::new(s);
        while let Some(b) = cur.peek() {
            if Self::DELIMITERS.contains(&b)
                && Self::is_single(&cur, b)
                && let Some(close) = Self::closing(&cur, b)
            {
                let open = cur.pos();
                return Some(InlineMatch {
                    start: open,
                    end: close + 1,
                    span: Span::Italic(s[open + 1..close].to_string()),
                });
            }
            cur.bump();
        }
        None
    }

    fn is_single(cur: &Cursor<'_>, delim: u8) -> bool {
        cur.prev() != Some(delim) && cur.peek_next() != Some(delim)
    }

    /// Position of the first valid closing delimiter after a non-empty run.
    fn closing(open: &Cursor<'_>, delim: u8) -> Option<usize> {
        let mut cur = open.clone();
        cur.bump();
        cur.bump();
        while cur.seek(delim) {
            if Self::is_single(&cur, delim) {
                return Some(cur.pos());
            }
            cur.bump();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_finds_leftmost_pair() {
        let m = Bold::find("a **b** **c**").unwrap();
        assert_eq!((m.start, m.end), (2, 7));
        assert_eq!(m.span, Span::Bold("b".into()));
    }

    #[test]
    fn bold_needs_content() {
        assert!(Bold::find("****").is_none());
        assert!(Bold::find("**open").is_none());
    }

    #[test]
    fn italic_star() {
        let m = Italic::find("x *y* z").unwrap();
        assert_eq!((m.start, m.end), (2, 5));
        assert_eq!(m.span, Span::Italic("y".into()));
    }

    #[test]
    fn italic_underscore() {
        let m = Italic::find("_under_").unwrap();
        assert_eq!(m.span, Span::Italic("under".into()));
    }

    #[test]
    fn italic_skips_bold_markers() {
        let m = Italic::find("**b** and *i*").unwrap();
        assert_eq!(m.span, Span::Italic("i".into()));
        assert_eq!(m.start, 10);
    }

    #[test]
    fn italic_delimiters_must_match() {
        assert!(Italic::find("*mixed_").is_none());
    }

    #[test]
    fn italic_needs_content() {
        assert!(Italic::find("a * b").is_none());
        assert!(Italic::find("__").is_none());
    }

    #[test]
    fn italic_after_multibyte_text() {
        let m = Italic::find("caf\u{e9} *ol\u{e9}*").unwrap();
        assert_eq!(m.span, Span::Italic("ol\u{e9}".into()));
    }
}
