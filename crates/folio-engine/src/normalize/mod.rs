//! # HTML Normalization
//!
//! Rewrites HTML fragments from the generative backend into the
//! pseudo-Markdown the block classifier understands.
//!
//! ## Phases
//!
//! 1. **Guard**: text without a tag or comment is returned untouched
//! 2. **Entities** (`entities`): named entities from an [`EntityTable`], then numeric references
//! 3. **Tags** (`tags`): ordered substitution chain, then comment and catch-all
//!    strippers repeated until no tag is left
//! 4. **Cleanup**: 3+ newlines collapse to 2, outer whitespace trimmed
//!
//! Normalization never fails. Unknown or malformed markup degrades to
//! stray characters once the catch-all has removed what it recognises as tags.
//! Output never contains a tag, so a second pass hits the guard and
//! `normalize(normalize(s)) == normalize(s)`.

pub mod entities;
pub mod tags;

use std::sync::OnceLock;

use regex::Regex;

pub use entities::EntityTable;

/// Normalizes `text` with the builtin entity table.
pub fn normalize(text: &str) -> String {
    static DEFAULT: OnceLock<HtmlNormalizer> = OnceLock::new();
    DEFAULT.get_or_init(HtmlNormalizer::default).normalize(text)
}

/// Returns true when `text` has a `<` followed somewhere by a `>`.
pub fn looks_like_html(text: &str) -> bool {
    text.find('<')
        .is_some_and(|open| text[open + 1..].contains('>'))
}

/// HTML to pseudo-Markdown converter with an injected entity table.
#[derive(Debug, Clone, Default)]
pub struct HtmlNormalizer {
    entities: EntityTable,
}

impl HtmlNormalizer {
    pub fn new(entities: EntityTable) -> Self {
        Self { entities }
    }

    pub fn normalize(&self, text: &str) -> String {
        if !looks_like_html(text) || !tags::contains_tag(text) {
            log::trace!("no markup in {} bytes of input, passing through", text.len());
            return text.to_string();
        }

        let decoded = self.entities.decode(text);
        let substituted = tags::substitute(&decoded);
        cleanup(&substituted)
    }
}

fn cleanup(text: &str) -> String {
    static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    let blank_run = BLANK_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));
    blank_run.replace_all(text, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_passes_through() {
        let md = "  # Title\n\n\n\nbody &amp; more  ";
        assert_eq!(normalize(md), md);
    }

    #[test]
    fn lone_angle_brackets_pass_through() {
        assert_eq!(normalize("a > b"), "a > b");
        assert_eq!(normalize("b > a < c"), "b > a < c");
    }

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            normalize("<h2>Hi</h2><p>A <strong>B</strong></p>"),
            "## Hi\nA **B**"
        );
    }

    #[test]
    fn collapses_blank_runs() {
        assert_eq!(normalize("<p>a</p><p>b</p><br><br>"), "a\n\nb");
    }

    #[test]
    fn list_markup_becomes_bullets() {
        assert_eq!(
            normalize("<ol><li>First</li><li>Second</li></ol>"),
            "\u{2022} First\n\u{2022} Second"
        );
    }

    #[test]
    fn encoded_tags_are_reinterpreted() {
        assert_eq!(normalize("<p>&lt;b&gt;x&lt;/b&gt;</p>"), "**x**");
    }

    #[test]
    fn decoded_comparison_survives_stripping() {
        assert_eq!(normalize("<p>1 &lt; 2 &gt; 0</p>"), "1 < 2 > 0");
    }

    #[test]
    fn injected_entities_are_used() {
        let normalizer = HtmlNormalizer::new(EntityTable::with_extra([("check", "\u{2713}")]));
        assert_eq!(normalizer.normalize("<p>&check; done</p>"), "\u{2713} done");
        assert_eq!(normalize("<p>&check; done</p>"), "&check; done");
    }

    #[test]
    fn stray_markup_degrades_to_text() {
        assert_eq!(normalize("<p>oops <b>bold</p> <"), "oops **bold\n\n <");
    }

    #[test]
    fn angle_pairs_without_tags_pass_through() {
        assert_eq!(normalize("1 < 2 > 0 &amp; done"), "1 < 2 > 0 &amp; done");
        assert_eq!(normalize("<<<>>>"), "<<<>>>");
    }

    #[test]
    fn assembled_tag_is_removed_in_one_pass() {
        let once = normalize("<<x>b>text");
        assert_eq!(once, "text");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn double_encoded_ampersand_is_stable() {
        let once = normalize("<p>x &lt; y &gt; z, write &amp;amp;</p>");
        assert_eq!(once, "x < y > z, write &amp;");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn looks_like_html_needs_an_ordered_pair() {
        assert!(looks_like_html("<p>"));
        assert!(!looks_like_html("> quote <"));
        assert!(!looks_like_html(""));
    }
}
