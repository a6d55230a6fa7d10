use crate::model::Block;

/// ATX-style heading markers.
pub struct Heading;

impl Heading {
    /// Markers checked longest first so `####` is not read as `#` plus text.
    pub const MARKERS: [(&'static str, u8); 4] = [("####", 4), ("###", 3), ("##", 2), ("#", 1)];

    pub fn parse(line: &str) -> Option<Block> {
        Self::MARKERS.iter().find_map(|(marker, level)| {
            line.strip_prefix(marker).map(|rest| Block::Heading {
                text: rest.trim().to_string(),
                level: *level,
            })
        })
    }
}
