use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::{Block, Document, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenList {
    Unordered,
    Ordered,
}

impl OpenList {
    fn close_tag(self) -> &'static str {
        match self {
            OpenList::Unordered => "</ul>",
            OpenList::Ordered => "</ol>",
        }
    }
}

/// Renders a document as an HTML fragment, one element per line.
///
/// Runs of list items of the same kind share a `<ul>`/`<ol>`. Ordered items
/// carry their parsed ordinal as `value`. Link labels become
/// `<span class="link">` because targets are not kept.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    let mut list: Option<OpenList> = None;

    for block in doc {
        let wanted = match block {
            Block::ListItem { ordered: true, .. } => Some(OpenList::Ordered),
            Block::ListItem { ordered: false, .. } => Some(OpenList::Unordered),
            _ => None,
        };
        if list != wanted {
            if let Some(open) = list {
                out.push_str(open.close_tag());
                out.push('\n');
            }
            match wanted {
                Some(OpenList::Unordered) => out.push_str("<ul>\n"),
                Some(OpenList::Ordered) => out.push_str("<ol>\n"),
                None => {}
            }
            list = wanted;
        }

        match block {
            Block::Heading { text, level } => {
                out.push_str(&format!("<h{level}>{}</h{level}>", encode_text(text)));
            }
            Block::Paragraph { text } => {
                out.push_str(&format!("<p>{}</p>", spans_to_html(text)));
            }
            Block::ListItem {
                text,
                ordered: true,
                index,
            } => {
                out.push_str(&format!(
                    "<li value=\"{index}\">{}</li>",
                    spans_to_html(text)
                ));
            }
            Block::ListItem { text, .. } => {
                out.push_str(&format!("<li>{}</li>", spans_to_html(text)));
            }
            Block::Quote { text } => {
                out.push_str(&format!("<blockquote>{}</blockquote>", spans_to_html(text)));
            }
            Block::Code { text, language } if language.is_empty() => {
                out.push_str(&format!("<pre><code>{}</code></pre>", encode_text(text)));
            }
            Block::Code { text, language } => {
                out.push_str(&format!(
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    encode_double_quoted_attribute(language),
                    encode_text(text)
                ));
            }
            Block::Divider => out.push_str("<hr>"),
            Block::Spacer => out.push_str("<div class=\"spacer\"></div>"),
        }
        out.push('\n');
    }

    if let Some(open) = list {
        out.push_str(open.close_tag());
        out.push('\n');
    }
    out
}

fn spans_to_html(text: &str) -> String {
    crate::inline::tokenize(text)
        .iter()
        .map(|span| match span {
            Span::PlainText(t) => encode_text(t).into_owned(),
            Span::Bold(t) => format!("<strong>{}</strong>", encode_text(t)),
            Span::Italic(t) => format!("<em>{}</em>", encode_text(t)),
            Span::InlineCode(t) => format!("<code>{}</code>", encode_text(t)),
            Span::LinkText(t) => format!("<span class=\"link\">{}</span>", encode_text(t)),
        })
        .collect()
}
