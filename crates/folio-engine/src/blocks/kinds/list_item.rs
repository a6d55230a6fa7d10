use std::sync::OnceLock;

use regex::Regex;

use crate::model::Block;

/// List item markers: bullets and `N. ` ordinals.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 3] = ["- ", "* ", "\u{2022} "];

    pub fn parse_bullet(line: &str) -> Option<Block> {
        Self::BULLETS.iter().find_map(|bullet| {
            line.strip_prefix(bullet).map(|rest| Block::ListItem {
                text: rest.to_string(),
                ordered: false,
                index: 0,
            })
        })
    }

    /// Parses `N. text`. Ordinals that overflow `u32` saturate.
    pub fn parse_ordered(line: &str) -> Option<Block> {
        static ORDINAL: OnceLock<Regex> = OnceLock::new();
        let ordinal =
            ORDINAL.get_or_init(|| Regex::new(r"^([0-9]+)\. ").expect("Invalid ordinal regex"));

        let caps = ordinal.captures(line)?;
        let index = caps[1].parse::<u32>().unwrap_or(u32::MAX);
        let matched = caps.get(0)?;
        Some(Block::ListItem {
            text: line[matched.end()..].to_string(),
            ordered: true,
            index,
        })
    }
}
