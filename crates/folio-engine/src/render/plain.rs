use crate::model::{Block, Document, Span};

/// Renders a document as plain text with inline markers consumed.
///
/// Structure that carries meaning is re-added: bullets and ordinals for list
/// items, `> ` for quotes, `---` for dividers. Spacers become empty lines.
pub fn to_plain_text(doc: &Document) -> String {
    doc.iter()
        .map(|block| match block {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph { text } => flatten(text),
            Block::ListItem {
                text,
                ordered: true,
                index,
            } => format!("{index}. {}", flatten(text)),
            Block::ListItem { text, .. } => format!("\u{2022} {}", flatten(text)),
            Block::Quote { text } => format!("> {}", flatten(text)),
            Block::Code { text, .. } => text.clone(),
            Block::Divider => "---".to_string(),
            Block::Spacer => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenates the span texts of `text`.
pub fn flatten(text: &str) -> String {
    crate::inline::tokenize(text)
        .iter()
        .map(Span::text)
        .collect()
}
