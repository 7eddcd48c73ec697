//! Headless playback: the terminal demo as plain text, one frame per tick.

use crate::lifecycle::STAGES;
use crate::player::{LogScript, StagedLogPlayer};

const CURSOR_BLOCK: &str = "█";

/// Render the frame before the first tick and after each of `ticks` advances
pub fn render_transcript(script: LogScript, ticks: usize) -> String {
    let mut player = StagedLogPlayer::new(script);
    let mut out = String::new();

    out.push_str(&frame(0, &player));
    for tick in 1..=ticks {
        player.advance();
        out.push('\n');
        out.push_str(&frame(tick, &player));
    }

    out
}

fn frame(tick: usize, player: &StagedLogPlayer) -> String {
    let mut out = format!("tick {tick}\n");
    for entry in player.current_view() {
        out.push_str(&format!("  {} {}\n", entry.glyph.symbol(), entry.text));
    }
    if player.cursor_visible() {
        out.push_str(&format!("  {CURSOR_BLOCK}\n"));
    }
    out
}

/// Plain listing of the lifecycle stages
pub fn render_stages() -> String {
    let mut out = String::new();
    for stage in &STAGES {
        out.push_str(&format!(
            "{} {} {}\n   > {}\n   {}\n",
            stage.number,
            stage.glyph.symbol(),
            stage.title,
            stage.status,
            stage.description
        ));
    }
    out
}
