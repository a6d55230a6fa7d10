/// A fence marker line. `info` is the trimmed text after the marker, which
/// names the language when the fence opens and is ignored when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub info: &'a str,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Detects a fence marker at the start of `line` (leading whitespace allowed).
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        line.trim_start()
            .strip_prefix(Self::BACKTICKS)
            .map(|rest| FenceSig { info: rest.trim() })
    }
}
