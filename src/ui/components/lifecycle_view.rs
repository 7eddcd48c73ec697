use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::lifecycle::{LifecycleFrame, StageFrame};
use crate::player::{ColorToken, Glyph};

use super::theme::{fade, token_color, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

/// Widest the activity bars and beams get
const MAX_TRACK_WIDTH: usize = 24;

const TRACK_IDLE: &str = "─";
const TRACK_LIT: &str = "━";

/// Vertical rendering of the plan-act-verify stages
pub struct LifecycleView<'a> {
    frame: &'a LifecycleFrame,
}

impl<'a> LifecycleView<'a> {
    pub fn new(frame: &'a LifecycleFrame) -> Self {
        Self { frame }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let track = (width as usize).saturating_sub(4).clamp(1, MAX_TRACK_WIDTH);
        let mut lines = Vec::with_capacity(4 + self.frame.stages.len() * 4);

        lines.push(self.core_line());
        for stage in &self.frame.stages {
            lines.push(beam_line(stage, track));
            lines.extend(stage_lines(stage, track));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("SYSTEM STATUS: ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                "OPERATIONAL",
                Style::default().fg(token_color(ColorToken::Green)),
            ),
        ]));

        lines
    }

    fn core_line(&self) -> Line<'static> {
        let glow = fade(
            token_color(ColorToken::Orange),
            0.35 + 0.65 * self.frame.core_glow,
        );
        Line::from(vec![
            Span::styled(Glyph::Cpu.symbol(), Style::default().fg(glow)),
            Span::raw(" "),
            Span::styled(
                "MOHTION CORE",
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Paragraph::new(self.lines(area.width)).render(area, buf);
    }
}

fn stage_lines(frame: &StageFrame, track: usize) -> [Line<'static>; 3] {
    let stage = frame.stage;
    let color = token_color(stage.color);

    let header = Line::from(vec![
        Span::styled(stage.glyph.symbol(), Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(stage.number, Style::default().fg(TEXT_MUTED)),
        Span::raw(" "),
        Span::styled(
            stage.title,
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let status = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("> {}", stage.status),
            Style::default().fg(fade(TEXT_MUTED, frame.status_opacity)),
        ),
    ]);

    let shift = frame.activity_offset * track as f64;
    let bar: Vec<Span<'static>> = std::iter::once(Span::raw("  "))
        .chain((0..track).map(|i| {
            let x = i as f64;
            if x >= shift && x < shift + track as f64 {
                Span::styled(TRACK_LIT, Style::default().fg(color))
            } else {
                Span::styled(TRACK_IDLE, Style::default().fg(TEXT_FAINT))
            }
        }))
        .collect();

    [header, status, Line::from(bar)]
}

/// Connector above a stage with the travelling beam segment
fn beam_line(frame: &StageFrame, track: usize) -> Line<'static> {
    let head = (frame.beam_position * track as f64) as usize;
    let len = (track / 4).max(1);
    let lit = fade(token_color(ColorToken::Orange), frame.beam_opacity);

    let spans: Vec<Span<'static>> = std::iter::once(Span::raw("  "))
        .chain((0..track).map(|i| {
            if i >= head && i < head + len {
                Span::styled(TRACK_LIT, Style::default().fg(lit))
            } else {
                Span::styled(TRACK_IDLE, Style::default().fg(TEXT_FAINT))
            }
        }))
        .collect();

    Line::from(spans)
}
