use crate::model::Span;

use super::kinds::{Bold, CodeSpan, InlineMatch, Italic, Link};

/// Finders in priority order. On equal start positions the earlier one wins.
const FINDERS: [fn(&str) -> Option<InlineMatch>; 4] =
    [Bold::find, Italic::find, CodeSpan::find, Link::find];

/// Tokenizes a block's text into styled spans.
///
/// Greedy left scan: each round takes the leftmost construct in the remaining
/// text, emits the text before it as `PlainText`, then the construct with its
/// delimiters stripped. Unterminated delimiters never match and stay in the
/// plain text. Concatenating the span texts gives the input minus consumed
/// delimiters (and minus link targets).
pub fn tokenize(text: &str) -> Vec<Span> {
    let mut out = vec![];
    let mut rest = text;

    while !rest.is_empty() {
        let Some(found) = leftmost_match(rest) else {
            out.push(Span::PlainText(rest.to_string()));
            break;
        };
        if found.start > 0 {
            out.push(Span::PlainText(rest[..found.start].to_string()));
        }
        rest = &rest[found.end..];
        out.push(found.span);
    }

    out
}

fn leftmost_match(s: &str) -> Option<InlineMatch> {
    FINDERS
        .iter()
        .filter_map(|find| find(s))
        .fold(None, |best: Option<InlineMatch>, m| match best {
            Some(b) if b.start <= m.start => Some(b),
            _ => Some(m),
        })
}
