use std::sync::OnceLock;

use regex::Regex;

/// A single tag substitution.
pub struct TagRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl TagRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid tag rule regex"),
            replacement,
        }
    }
}

/// The substitution chain, in application order.
///
/// Later rules rely on earlier ones having already consumed their tags: `<b>`
/// must not be seen by the catch-all, `<pre><code>` must become a fence before
/// the bare `<code>` rule turns it into backticks, and `<p>` must not match
/// `<pre>`.
pub fn rules() -> &'static [TagRule] {
    static RULES: OnceLock<Vec<TagRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            // Headings
            TagRule::new(r"(?i)<h1(?:\s[^>]*)?>", "\n# "),
            TagRule::new(r"(?i)<h2(?:\s[^>]*)?>", "\n## "),
            TagRule::new(r"(?i)<h3(?:\s[^>]*)?>", "\n### "),
            TagRule::new(r"(?i)<h4(?:\s[^>]*)?>", "\n#### "),
            TagRule::new(r"(?i)</h[1-4]\s*>", "\n"),
            // Emphasis
            TagRule::new(r"(?i)</?(?:strong|b)(?:\s[^>]*)?>", "**"),
            TagRule::new(r"(?i)</?(?:em|i)(?:\s[^>]*)?>", "*"),
            // Line breaks and paragraphs
            TagRule::new(r"(?i)<br(?:\s[^>]*)?/?>", "\n"),
            TagRule::new(r"(?i)</p\s*>", "\n\n"),
            TagRule::new(r"(?i)<p(?:\s[^>]*)?>", ""),
            // Lists
            TagRule::new(r"(?i)<li(?:\s[^>]*)?>", "\u{2022} "),
            TagRule::new(r"(?i)</li\s*>", "\n"),
            TagRule::new(r"(?i)</?(?:ul|ol)(?:\s[^>]*)?>", "\n"),
            // Code
            TagRule::new(
                r#"(?i)<pre(?:\s[^>]*)?>\s*<code(?:\s[^>]*?class\s*=\s*"(?:language-|lang-)?([\w+#-]*)[^"]*"[^>]*|\s[^>]*)?>"#,
                "```${1}\n",
            ),
            TagRule::new(r"(?i)</code\s*>\s*</pre\s*>", "\n```\n"),
            TagRule::new(r"(?i)</?code(?:\s[^>]*)?>", "`"),
            TagRule::new(r"(?i)<pre(?:\s[^>]*)?>", "```\n"),
            TagRule::new(r"(?i)</pre\s*>", "\n```\n"),
            // Quotes and rules
            TagRule::new(r"(?i)<blockquote(?:\s[^>]*)?>", "> "),
            TagRule::new(r"(?i)</blockquote\s*>", "\n"),
            TagRule::new(r"(?i)<hr(?:\s[^>]*)?/?>", "\n---\n"),
            // Wrappers
            TagRule::new(r"(?i)<div(?:\s[^>]*)?>", ""),
            TagRule::new(r"(?i)</div\s*>", "\n"),
            TagRule::new(r"(?i)</?span(?:\s[^>]*)?>", ""),
        ]
    })
}

/// Comment and catch-all strippers, applied after [`rules`].
///
/// Every tag an earlier rule rewrites is also matched here, so text with no
/// match for either pattern is left alone by the whole chain.
pub fn leftovers() -> &'static [TagRule] {
    static LEFTOVERS: OnceLock<Vec<TagRule>> = OnceLock::new();
    LEFTOVERS.get_or_init(|| {
        vec![
            TagRule::new(r"(?s)<!--.*?-->", ""),
            TagRule::new(r"</?[A-Za-z][A-Za-z0-9-]*(?:\s[^>]*)?/?>", ""),
        ]
    })
}

/// Whether `text` holds a tag or comment the chain would rewrite.
pub fn contains_tag(text: &str) -> bool {
    leftovers().iter().any(|rule| rule.pattern.is_match(text))
}

/// Applies every rule in order, then strips leftovers until none remain.
pub fn substitute(text: &str) -> String {
    let mut out = rules().iter().fold(text.to_string(), apply);
    // Removing `<x>` from `<<x>b>` leaves a fresh `<b>`.
    while contains_tag(&out) {
        out = leftovers().iter().fold(out, apply);
    }
    out
}

fn apply(acc: String, rule: &TagRule) -> String {
    if rule.pattern.is_match(&acc) {
        rule.pattern.replace_all(&acc, rule.replacement).into_owned()
    } else {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<h1>T</h1>", "\n# T\n")]
    #[case("<h4 class=\"x\">T</h4>", "\n#### T\n")]
    #[case("<b>x</b> <STRONG>y</STRONG>", "**x** **y**")]
    #[case("<em>x</em><i>y</i>", "*x**y*")]
    #[case("a<br>b<br/>c<br />d", "a\nb\nc\nd")]
    #[case("<p class=\"lead\">a</p>", "a\n\n")]
    #[case("<ul><li>a</li></ul>", "\n\u{2022} a\n\n")]
    #[case("<code>x</code>", "`x`")]
    #[case("<pre>x</pre>", "```\nx\n```\n")]
    #[case("<blockquote>q</blockquote>", "> q\n")]
    #[case("a<hr/>b", "a\n---\nb")]
    #[case("<div><span>s</span></div>", "s\n")]
    #[case("<section data-x=\"1\">s</section><!-- note -->", "s")]
    fn substitutes_tags(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(substitute(input), expected);
    }

    #[rstest]
    #[case("<<x>b>text", "text")]
    #[case("<<!-- c -->p>a</p>", "a\n\n")]
    #[case("<<!<x>-- c -->i>y", "y")]
    fn assembled_tags_are_stripped(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(substitute(input), expected);
        assert!(!contains_tag(&substitute(input)));
    }

    #[rstest]
    #[case("<p>", true)]
    #[case("a <!-- c --> b", true)]
    #[case("1 < 2 > 0", false)]
    #[case("<<<>>>", false)]
    #[case("x <3 and y>", false)]
    fn detects_tags(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(contains_tag(input), expected);
    }

    #[test]
    fn pre_code_becomes_fence_with_language() {
        let html = r#"<pre><code class="language-python">print(1)</code></pre>"#;
        assert_eq!(substitute(html), "```python\nprint(1)\n```\n");
    }

    #[test]
    fn pre_code_without_class_has_empty_language() {
        assert_eq!(
            substitute("<pre><code>x = 1</code></pre>"),
            "```\nx = 1\n```\n"
        );
    }

    #[test]
    fn bold_rule_does_not_touch_br_or_blockquote() {
        assert_eq!(
            substitute("<blockquote>a<br>b</blockquote>"),
            "> a\nb\n"
        );
    }

    #[test]
    fn p_rule_does_not_touch_pre() {
        assert_eq!(substitute("<pre>x</pre>"), "```\nx\n```\n");
    }
}
