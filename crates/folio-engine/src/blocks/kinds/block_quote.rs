use crate::model::Block;

/// Blockquote prefix. Nesting is not tracked: `>> x` is a quote of `> x`.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    pub fn parse(line: &str) -> Option<Block> {
        line.strip_prefix(Self::PREFIX).map(|rest| Block::Quote {
            text: rest.trim().to_string(),
        })
    }
}
