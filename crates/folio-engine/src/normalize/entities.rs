use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Named entities understood by default.
///
/// `&amp;` must stay last: decoding it earlier would turn `&amp;lt;` into `<`.
const BUILTIN: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&#39;", "'"),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
    ("&hellip;", "\u{2026}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&bull;", "\u{2022}"),
    ("&copy;", "\u{00A9}"),
    ("&reg;", "\u{00AE}"),
    ("&trade;", "\u{2122}"),
    ("&times;", "\u{00D7}"),
    ("&divide;", "\u{00F7}"),
    ("&plusmn;", "\u{00B1}"),
    ("&minus;", "\u{2212}"),
    ("&ne;", "\u{2260}"),
    ("&le;", "\u{2264}"),
    ("&ge;", "\u{2265}"),
    ("&infin;", "\u{221E}"),
    ("&radic;", "\u{221A}"),
    ("&pi;", "\u{03C0}"),
    ("&sum;", "\u{2211}"),
    ("&frac12;", "\u{00BD}"),
    ("&frac14;", "\u{00BC}"),
    ("&frac34;", "\u{00BE}"),
    ("&deg;", "\u{00B0}"),
    ("&larr;", "\u{2190}"),
    ("&rarr;", "\u{2192}"),
    ("&amp;", "&"),
];

/// Ordered table of named entity replacements.
///
/// Named entities are replaced literally, in table order. Numeric character
/// references (`&#233;`, `&#xE9;`) are resolved afterwards; anything that
/// does not name a valid Unicode scalar is left as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTable {
    entries: Vec<(String, String)>,
}

impl EntityTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Extends the builtin table with extra entities.
    ///
    /// Names may be given with or without the surrounding `&`/`;`. Extras are
    /// applied before `&amp;`, which always runs last.
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::builtin();
        let amp = table.entries.pop();
        for (name, value) in extra {
            let name = Self::canonical_name(name.as_ref());
            let value = value.into();
            match table.entries.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = value,
                None => table.entries.push((name, value)),
            }
        }
        table.entries.extend(amp);
        table
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes named then numeric entity references.
    pub fn decode(&self, text: &str) -> String {
        if !text.contains('&') {
            return text.to_string();
        }
        let mut out = text.to_string();
        for (name, value) in &self.entries {
            if out.contains(name.as_str()) {
                out = out.replace(name.as_str(), value);
            }
        }
        decode_numeric(&out)
    }

    fn canonical_name(name: &str) -> String {
        let bare = name.trim().trim_start_matches('&').trim_end_matches(';');
        format!("&{bare};")
    }
}

impl Default for EntityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn numeric_ref_regex() -> &'static Regex {
    static NUMERIC_REF: OnceLock<Regex> = OnceLock::new();
    NUMERIC_REF.get_or_init(|| {
        Regex::new(r"&#([xX][0-9A-Za-z]+|[0-9A-Za-z]+);").expect("Invalid numeric ref regex")
    })
}

/// Resolves `&#NNN;` and `&#xHH;` references, leaving malformed ones intact.
fn decode_numeric(text: &str) -> String {
    if !text.contains("&#") {
        return text.to_string();
    }
    numeric_ref_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let body = &caps[1];
            let code = match body.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => body.parse::<u32>().ok(),
            };
            match code.and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
