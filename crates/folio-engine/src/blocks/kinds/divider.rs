/// Thematic break markers.
pub struct Divider;

impl Divider {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];

    pub fn matches(line: &str) -> bool {
        Self::MARKERS.iter().any(|m| line.starts_with(m))
    }
}
