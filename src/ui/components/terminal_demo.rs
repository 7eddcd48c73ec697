//! Terminal window showing the staged worker log.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::player::{LogEntry, StagedLogPlayer};

use super::theme::{
    token_color, BG_WINDOW_BAR, BORDER_DEFAULT, CURSOR, DOT_CLOSE, DOT_MINIMIZE, DOT_ZOOM,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

pub const DEFAULT_WINDOW_TITLE: &str = "mohtion-worker — 85x24";

const CURSOR_BLOCK: &str = "█";

/// Snapshot of a [`StagedLogPlayer`] ready to draw
pub struct TerminalDemo<'a> {
    view: &'a [LogEntry],
    cursor_visible: bool,
    blink_on: bool,
    title: &'a str,
    cursor_color: Color,
}

impl<'a> TerminalDemo<'a> {
    pub fn new(view: &'a [LogEntry], cursor_visible: bool) -> Self {
        Self {
            view,
            cursor_visible,
            blink_on: true,
            title: DEFAULT_WINDOW_TITLE,
            cursor_color: CURSOR,
        }
    }

    pub fn from_player(player: &'a StagedLogPlayer) -> Self {
        Self::new(player.current_view(), player.cursor_visible())
    }

    /// Set the cursor blink phase; an "off" phase draws a blank cell
    pub fn blink(mut self, on: bool) -> Self {
        self.blink_on = on;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn cursor_color(mut self, color: Color) -> Self {
        self.cursor_color = color;
        self
    }

    /// Log rows plus the cursor row while the script is still emitting
    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line<'a>> = self.view.iter().map(entry_line).collect();

        if self.cursor_visible {
            let symbol = if self.blink_on { CURSOR_BLOCK } else { " " };
            lines.push(Line::from(Span::styled(
                symbol,
                Style::default().fg(self.cursor_color),
            )));
        }

        lines
    }

    /// Title bar: three window dots followed by the window title
    fn title_line(&self, width: u16) -> Line<'a> {
        let dots = [DOT_CLOSE, DOT_MINIMIZE, DOT_ZOOM];
        let mut spans: Vec<Span<'a>> = Vec::with_capacity(8);
        spans.push(Span::raw(" "));
        for color in dots {
            spans.push(Span::styled("● ", Style::default().fg(color)));
        }

        // Drop the title rather than wrap it when the window is too narrow
        let used = 1 + 2 * dots.len();
        if used + 1 + self.title.width() <= width as usize {
            spans.push(Span::styled(
                format!(" {}", self.title),
                Style::default().fg(TEXT_MUTED),
            ));
        }

        Line::from(spans)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 4 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT));
        let inner = block.inner(area);
        block.render(area, buf);

        let bar = Rect::new(inner.x, inner.y, inner.width, 1);
        Paragraph::new(self.title_line(inner.width))
            .style(Style::default().bg(BG_WINDOW_BAR))
            .render(bar, buf);

        let body = Rect::new(
            inner.x.saturating_add(2),
            inner.y.saturating_add(2),
            inner.width.saturating_sub(4),
            inner.height.saturating_sub(3),
        );
        if body.width == 0 || body.height == 0 {
            return;
        }
        Paragraph::new(self.lines()).render(body, buf);
    }
}

fn entry_line(entry: &LogEntry) -> Line<'_> {
    let text_color = if entry.is_success() {
        TEXT_PRIMARY
    } else {
        TEXT_SECONDARY
    };

    Line::from(vec![
        Span::styled(
            entry.glyph.symbol(),
            Style::default().fg(token_color(entry.color)),
        ),
        Span::raw(" "),
        Span::styled(
            entry.text.as_str(),
            Style::default()
                .fg(text_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
