use folio_engine::{Block as MarkupBlock, Document, Span as MarkupSpan};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const RULE_WIDTH: usize = 40;

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        3 => Color::Green,
        _ => Color::Blue,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if level == 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn gutter_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn span_style(span: &MarkupSpan) -> Style {
    match span {
        MarkupSpan::PlainText(_) => Style::default(),
        MarkupSpan::Bold(_) => Style::default().add_modifier(Modifier::BOLD),
        MarkupSpan::Italic(_) => Style::default().add_modifier(Modifier::ITALIC),
        MarkupSpan::InlineCode(_) => code_style(),
        MarkupSpan::LinkText(_) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    }
}

fn styled_spans(block: &MarkupBlock) -> Vec<Span<'static>> {
    block
        .spans()
        .unwrap_or_default()
        .into_iter()
        .map(|span| {
            let style = span_style(&span);
            Span::styled(span.text().to_string(), style)
        })
        .collect()
}

/// Terminal lines for one block. Code blocks produce one line per source line.
pub fn block_lines(block: &MarkupBlock) -> Vec<Line<'static>> {
    match block {
        MarkupBlock::Heading { text, level } => {
            vec![Line::from(Span::styled(text.clone(), heading_style(*level)))]
        }
        MarkupBlock::Paragraph { .. } => vec![Line::from(styled_spans(block))],
        MarkupBlock::ListItem { ordered, index, .. } => {
            let marker = if *ordered {
                format!("  {index}. ")
            } else {
                "  • ".to_string()
            };
            let mut spans = vec![Span::styled(marker, gutter_style())];
            spans.extend(styled_spans(block));
            vec![Line::from(spans)]
        }
        MarkupBlock::Quote { .. } => {
            let mut spans = vec![Span::styled("│ ", gutter_style())];
            spans.extend(
                styled_spans(block)
                    .into_iter()
                    .map(|s| s.patch_style(Style::default().add_modifier(Modifier::ITALIC))),
            );
            vec![Line::from(spans)]
        }
        MarkupBlock::Code { text, language } => {
            let mut lines = Vec::new();
            if !language.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  ┌ {language}"),
                    gutter_style(),
                )));
            }
            lines.extend(text.split('\n').map(|line| {
                Line::from(vec![
                    Span::styled("  │ ", gutter_style()),
                    Span::styled(line.to_string(), code_style()),
                ])
            }));
            lines
        }
        MarkupBlock::Divider => vec![Line::from(Span::styled(
            "─".repeat(RULE_WIDTH),
            gutter_style(),
        ))],
        MarkupBlock::Spacer => vec![Line::default()],
    }
}

pub fn document_lines(document: &Document) -> Vec<Line<'static>> {
    document.iter().flat_map(block_lines).collect()
}
