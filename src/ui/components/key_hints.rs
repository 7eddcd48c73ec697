//! Footer key hint bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{KEY_HINT_BG, TEXT_MUTED, TEXT_SECONDARY};

const ITEM_GAP: &str = "   ";

pub fn key_hints_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(ITEM_GAP));
        }
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(TEXT_MUTED),
        ));
    }

    Line::from(spans)
}

pub fn render_key_hints(area: Rect, buf: &mut Buffer, hints: &[(&str, &str)]) {
    Paragraph::new(key_hints_line(hints)).render(area, buf);
}
