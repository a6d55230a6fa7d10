use crate::model::Block;

use super::kinds::{BlockQuote, Divider, Heading, ListItem};

/// Tries the single-line block openers in precedence order.
///
/// `line` must already have its leading whitespace removed. Returns `None`
/// when nothing matches and the line is paragraph text.
pub fn try_open_leaf(line: &str) -> Option<Block> {
    if let Some(heading) = Heading::parse(line) {
        return Some(heading);
    }
    if let Some(item) = ListItem::parse_bullet(line) {
        return Some(item);
    }
    if let Some(item) = ListItem::parse_ordered(line) {
        return Some(item);
    }
    if let Some(quote) = BlockQuote::parse(line) {
        return Some(quote);
    }
    if Divider::matches(line) {
        return Some(Block::Divider);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_beats_divider() {
        assert!(matches!(
            try_open_leaf("- - -"),
            Some(Block::ListItem { ordered: false, .. })
        ));
    }

    #[test]
    fn dashes_without_space_are_a_divider() {
        assert_eq!(try_open_leaf("---"), Some(Block::Divider));
        assert_eq!(try_open_leaf("***"), Some(Block::Divider));
    }

    #[test]
    fn plain_text_opens_nothing() {
        assert_eq!(try_open_leaf("just words"), None);
    }
}
