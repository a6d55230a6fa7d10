//! UniFFI bindings for the Folio mobile apps
//!
//! Exposes the markup pipeline to the Kotlin and Swift clients. Sum types are
//! flattened into records with a `kind` discriminant, since the generated
//! bindings cannot express Rust enums with per-variant payloads idiomatically
//! on both platforms.

use folio_config::{HeadingScale, RenderConfig};
use folio_engine::{Block, Document, HtmlNormalizer, Span};
use std::sync::Arc;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Config error: {reason}")]
    ConfigError { reason: String },
}

// ============ Config Handle ============

/// Render configuration loaded once by the app and reused for every render pass.
#[derive(uniffi::Object)]
pub struct RenderConfigHandle {
    scale: HeadingScale,
    normalizer: HtmlNormalizer,
}

#[uniffi::export]
impl RenderConfigHandle {
    /// Parse a TOML config document.
    #[uniffi::constructor]
    pub fn from_toml(content: String) -> Result<Self, FfiError> {
        let config =
            RenderConfig::from_toml_str(&content).map_err(|e| FfiError::ConfigError {
                reason: e.to_string(),
            })?;
        Ok(Self::from_config(&config))
    }

    /// Builtin entities and the default heading scale.
    #[uniffi::constructor]
    pub fn default_config() -> Self {
        Self::from_config(&RenderConfig::default())
    }

    /// Font size for a heading level (clamped to 1..=4).
    pub fn heading_size(&self, level: u8) -> f32 {
        self.scale.size_for(level)
    }

    pub fn body_size(&self) -> f32 {
        self.scale.body
    }

    /// Normalize and classify `text` using this configuration.
    pub fn render(&self, text: String) -> DocumentDto {
        let doc = folio_engine::render_document_with(&self.normalizer, &text);
        DocumentDto::from_engine(doc, &self.scale)
    }
}

impl RenderConfigHandle {
    fn from_config(config: &RenderConfig) -> Self {
        Self {
            scale: config.heading_scale,
            normalizer: config.normalizer(),
        }
    }
}

// ============ DTOs ============

/// UI-ready document: blocks in source order.
#[derive(uniffi::Record)]
pub struct DocumentDto {
    pub blocks: Vec<BlockDto>,
}

impl DocumentDto {
    fn from_engine(doc: Document, scale: &HeadingScale) -> Self {
        Self {
            blocks: doc
                .blocks
                .into_iter()
                .map(|b| BlockDto::from_engine(b, scale))
                .collect(),
        }
    }
}

/// A single renderable block.
#[derive(uniffi::Record)]
pub struct BlockDto {
    /// "heading", "paragraph", "list_item", "quote", "code", "divider" or "spacer"
    pub kind: String,
    /// Block text; empty for dividers and spacers
    pub text: String,
    /// Heading level (1-4) if this is a heading, 0 otherwise
    pub level: u8,
    /// Whether a list item is numbered
    pub ordered: bool,
    /// Parsed ordinal of a numbered list item, 0 otherwise
    pub index: u32,
    /// Code block language, empty when absent
    pub language: String,
    /// Font size from the heading scale (body size for non-headings)
    pub font_size: f32,
    /// Inline spans for paragraphs, list items and quotes; empty otherwise
    pub spans: Vec<SpanDto>,
}

impl BlockDto {
    fn from_engine(block: Block, scale: &HeadingScale) -> Self {
        let spans = block
            .spans()
            .unwrap_or_default()
            .into_iter()
            .map(SpanDto::from_engine)
            .collect();

        let base = Self {
            kind: String::new(),
            text: block.text().unwrap_or_default().to_string(),
            level: 0,
            ordered: false,
            index: 0,
            language: String::new(),
            font_size: scale.body,
            spans,
        };

        match block {
            Block::Heading { level, .. } => Self {
                kind: "heading".to_string(),
                level,
                font_size: scale.size_for(level),
                ..base
            },
            Block::Paragraph { .. } => Self {
                kind: "paragraph".to_string(),
                ..base
            },
            Block::ListItem { ordered, index, .. } => Self {
                kind: "list_item".to_string(),
                ordered,
                index,
                ..base
            },
            Block::Quote { .. } => Self {
                kind: "quote".to_string(),
                ..base
            },
            Block::Code { language, .. } => Self {
                kind: "code".to_string(),
                language,
                ..base
            },
            Block::Divider => Self {
                kind: "divider".to_string(),
                ..base
            },
            Block::Spacer => Self {
                kind: "spacer".to_string(),
                ..base
            },
        }
    }
}

/// An inline styled run of text.
#[derive(uniffi::Record)]
pub struct SpanDto {
    /// "plain", "bold", "italic", "inline_code" or "link"
    pub kind: String,
    pub text: String,
}

impl SpanDto {
    fn from_engine(span: Span) -> Self {
        let (kind, text) = match span {
            Span::PlainText(text) => ("plain", text),
            Span::Bold(text) => ("bold", text),
            Span::Italic(text) => ("italic", text),
            Span::InlineCode(text) => ("inline_code", text),
            Span::LinkText(text) => ("link", text),
        };
        Self {
            kind: kind.to_string(),
            text,
        }
    }
}

// ============ Standalone Functions ============

/// Install the platform log backend. Safe to call more than once.
#[uniffi::export]
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("Folio"),
        );
    }
    log::info!("folio-ffi logging initialised");
}

/// Normalize and classify `text` with builtin entities and the default heading scale.
#[uniffi::export]
pub fn render_markup(text: String) -> DocumentDto {
    DocumentDto::from_engine(
        folio_engine::render_document(&text),
        &HeadingScale::default(),
    )
}

/// Normalize and classify `text` with a loaded configuration.
#[uniffi::export]
pub fn render_markup_with_config(config: Arc<RenderConfigHandle>, text: String) -> DocumentDto {
    config.render(text)
}

/// Rewrite HTML into the pseudo-Markdown the renderer consumes.
#[uniffi::export]
pub fn normalize_html(text: String) -> String {
    folio_engine::normalize(&text)
}

/// Tokenize a single block's text into spans.
#[uniffi::export]
pub fn tokenize_inline(text: String) -> Vec<SpanDto> {
    folio_engine::tokenize(&text)
        .into_iter()
        .map(SpanDto::from_engine)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(doc: &DocumentDto) -> Vec<&str> {
        doc.blocks.iter().map(|b| b.kind.as_str()).collect()
    }

    #[test]
    fn test_render_markup_kinds() {
        let content = "# H1\n\n- Dash\n7. Seven\n> Quote\n---\n```rust\ncode\n```\nText";
        let doc = render_markup(content.to_string());

        assert_eq!(
            kinds(&doc),
            vec![
                "heading",
                "spacer",
                "list_item",
                "list_item",
                "quote",
                "divider",
                "code",
                "paragraph"
            ]
        );
        assert_eq!(doc.blocks[0].level, 1);
        assert_eq!(doc.blocks[0].font_size, 28.0);
        assert_eq!(doc.blocks[3].index, 7);
        assert!(doc.blocks[3].ordered);
        assert_eq!(doc.blocks[6].language, "rust");
        assert_eq!(doc.blocks[6].text, "code");
        assert_eq!(doc.blocks[7].font_size, 16.0);
    }

    #[test]
    fn test_spans_only_on_inline_blocks() {
        let doc = render_markup("## **Not split**\nA **b**".to_string());
        assert!(doc.blocks[0].spans.is_empty());
        let spans: Vec<_> = doc.blocks[1]
            .spans
            .iter()
            .map(|s| (s.kind.as_str(), s.text.as_str()))
            .collect();
        assert_eq!(spans, vec![("plain", "A "), ("bold", "b")]);
    }

    #[test]
    fn test_normalize_html() {
        assert_eq!(
            normalize_html("<h2>Hi</h2><p>A <strong>B</strong></p>".to_string()),
            "## Hi\nA **B**"
        );
    }

    #[test]
    fn test_tokenize_inline_link_label() {
        let spans = tokenize_inline("[label](https://x.test)".to_string());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, "link");
        assert_eq!(spans[0].text, "label");
    }

    #[test]
    fn test_config_handle_scale_and_entities() {
        let toml = "[heading_scale]\nbody = 15.0\nsizes = [30.0, 26.0, 22.0, 19.0]\n\n[entities]\ncheck = \"\u{2713}\"\n";
        let handle = RenderConfigHandle::from_toml(toml.to_string()).unwrap();

        assert_eq!(handle.heading_size(2), 26.0);
        assert_eq!(handle.body_size(), 15.0);

        let doc = handle.render("<h2>Done &check;</h2>".to_string());
        assert_eq!(doc.blocks[0].text, "Done \u{2713}");
        assert_eq!(doc.blocks[0].font_size, 26.0);
    }

    #[test]
    fn test_render_markup_with_config() {
        let toml = "[entities]\nstar = \"\u{2605}\"\n";
        let handle = Arc::new(RenderConfigHandle::from_toml(toml.to_string()).unwrap());
        let doc = render_markup_with_config(handle, "<p>&star; rated</p>".to_string());
        assert_eq!(kinds(&doc), vec!["paragraph"]);
        assert_eq!(doc.blocks[0].text, "\u{2605} rated");
    }

    #[test]
    fn test_config_handle_rejects_bad_toml() {
        let result = RenderConfigHandle::from_toml("heading_scale = [".to_string());
        assert!(matches!(result, Err(FfiError::ConfigError { .. })));
    }

    #[test]
    fn test_default_config_matches_render_markup() {
        let handle = RenderConfigHandle::default_config();
        let a = handle.render("# T\nbody".to_string());
        let b = render_markup("# T\nbody".to_string());
        assert_eq!(kinds(&a), kinds(&b));
        assert_eq!(a.blocks[0].font_size, b.blocks[0].font_size);
    }
}
