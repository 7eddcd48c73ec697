//! Rendering tests through Ratatui's TestBackend
//!
//! Clocks are paused so the cursor blink and lifecycle motions sit at their
//! first frame.

use std::time::Duration;

use mohtion::player::{LogScript, StagedLogPlayer};
use mohtion::ui::components::TerminalDemo;
use mohtion::{App, Config, LifecycleStepper};

use super::common::terminal::{
    buffer_contains, buffer_region_to_string, create_test_terminal, create_test_terminal_sized,
    row_of,
};

fn fixed_lifecycle() -> LifecycleStepper {
    LifecycleStepper::with_beam_delays([Duration::ZERO; 4])
}

#[tokio::test(start_paused = true)]
async fn test_app_draws_demo_lifecycle_and_hints() {
    let app = App::new(Config::default()).with_lifecycle(fixed_lifecycle());
    let mut terminal = create_test_terminal();
    terminal.draw(|f| app.draw(f)).unwrap();
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, "mohtion-worker — 85x24"));
    assert!(buffer_contains(buffer, "⌕ Scanning repository..."));
    assert!(buffer_contains(buffer, "█"));
    assert!(!buffer_contains(buffer, "Found target"));

    assert!(buffer_contains(buffer, "MOHTION CORE"));
    let stages: Vec<usize> = ["RECONNAISSANCE", "REFACTORING", "VERIFICATION", "BOUNTY CLAIM"]
        .iter()
        .map(|title| row_of(buffer, title).expect("stage rendered"))
        .collect();
    assert!(stages.windows(2).all(|w| w[0] < w[1]));
    assert!(buffer_contains(buffer, "SYSTEM STATUS: OPERATIONAL"));

    // Paused until started
    assert_eq!(row_of(buffer, "resume"), Some(23));
}

#[tokio::test(start_paused = true)]
async fn test_full_reveal_hides_cursor() {
    let app = App::new(Config::default()).with_lifecycle(fixed_lifecycle());
    {
        let player = app.player();
        let mut player = player.lock();
        for _ in 0..6 {
            player.advance();
        }
    }

    let mut terminal = create_test_terminal();
    terminal.draw(|f| app.draw(f)).unwrap();
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, "PR Created: mohtion/bounty-8f2a"));
    assert!(!buffer_contains(buffer, "█"));
}

#[tokio::test(start_paused = true)]
async fn test_lifecycle_can_be_hidden() {
    let config = Config {
        show_lifecycle: false,
        ..Config::default()
    };
    let app = App::new(config);
    let mut terminal = create_test_terminal();
    terminal.draw(|f| app.draw(f)).unwrap();
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, "Scanning repository..."));
    assert!(!buffer_contains(buffer, "RECONNAISSANCE"));
}

#[test]
fn test_terminal_demo_layout() {
    let mut player = StagedLogPlayer::new(LogScript::worker_demo());
    player.advance();

    let mut terminal = create_test_terminal_sized(50, 12);
    terminal
        .draw(|f| TerminalDemo::from_player(&player).render(f.area(), f.buffer_mut()))
        .unwrap();
    let buffer = terminal.backend().buffer();

    // Border, title bar, blank spacer, then the log
    assert_eq!(row_of(buffer, "mohtion-worker"), Some(1));
    assert_eq!(row_of(buffer, "Scanning repository..."), Some(3));
    assert_eq!(row_of(buffer, "Found target"), Some(4));
    assert_eq!(row_of(buffer, "█"), Some(5));

    let title_bar = buffer_region_to_string(buffer, ratatui::layout::Rect::new(1, 1, 7, 1));
    assert_eq!(title_bar, " ● ● ● \n");
}

#[test]
fn test_narrow_window_drops_title() {
    let player = StagedLogPlayer::new(LogScript::worker_demo());
    let mut terminal = create_test_terminal_sized(16, 8);
    terminal
        .draw(|f| TerminalDemo::from_player(&player).render(f.area(), f.buffer_mut()))
        .unwrap();

    assert!(!buffer_contains(terminal.backend().buffer(), "mohtion-worker"));
}
