//! Integration tests for the interactive playback flow
//!
//! Drives the App through key events on a paused clock and checks that the
//! ticker only moves the log while playback is active.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::time;

use mohtion::player::{ColorToken, Glyph};
use mohtion::ui::{AppEvent, PlaybackMode};
use mohtion::{App, Config, LogEntry, LogScript};

const TICK: Duration = Duration::from_millis(1200);

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn revealed(app: &App) -> usize {
    app.player().lock().revealed_count()
}

#[tokio::test(start_paused = true)]
async fn test_pause_releases_ticker_and_resume_restarts_it() {
    let mut app = App::new(Config::default().with_tick_interval(TICK));
    app.start();
    assert_eq!(app.mode(), PlaybackMode::Playing);

    time::sleep(TICK * 2 + TICK / 2).await;
    assert_eq!(revealed(&app), 2);

    app.handle_event(key(KeyCode::Char(' '))).await;
    assert_eq!(app.mode(), PlaybackMode::Paused);

    time::sleep(TICK * 10).await;
    assert_eq!(revealed(&app), 2, "paused playback must not advance");

    app.handle_event(key(KeyCode::Char(' '))).await;
    time::sleep(TICK + TICK / 2).await;
    assert_eq!(revealed(&app), 3);
}

#[tokio::test(start_paused = true)]
async fn test_manual_step_only_while_paused() {
    let mut app = App::new(Config::default().with_tick_interval(TICK));

    app.handle_event(key(KeyCode::Char('n'))).await;
    app.handle_event(key(KeyCode::Right)).await;
    assert_eq!(revealed(&app), 2);

    app.start();
    app.handle_event(key(KeyCode::Char('n'))).await;
    assert_eq!(revealed(&app), 2);
}

#[tokio::test(start_paused = true)]
async fn test_restart_resets_log_and_cadence() {
    let mut app = App::new(Config::default().with_tick_interval(TICK));
    app.start();
    time::sleep(TICK * 3 + TICK / 2).await;
    assert_eq!(revealed(&app), 3);

    app.handle_event(key(KeyCode::Char('r'))).await;
    assert_eq!(revealed(&app), 0);
    assert_eq!(app.mode(), PlaybackMode::Playing);

    // The new ticker waits a full period before its first advance
    time::sleep(TICK / 2).await;
    assert_eq!(revealed(&app), 0);
    time::sleep(TICK).await;
    assert_eq!(revealed(&app), 1);
}

#[tokio::test(start_paused = true)]
async fn test_full_cycle_through_app() {
    let mut app = App::new(Config::default().with_tick_interval(TICK));
    app.start();

    time::sleep(TICK * 6 + TICK / 2).await;
    {
        let player = app.player();
        let player = player.lock();
        assert_eq!(player.current_view().len(), 6);
        assert!(!player.cursor_visible());
    }

    time::sleep(TICK).await;
    let player = app.player();
    let player = player.lock();
    assert_eq!(player.current_view().len(), 1);
    assert!(player.cursor_visible());
    assert_eq!(player.cycles_completed(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        AppEvent::Input(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))),
        AppEvent::Quit,
    ] {
        let mut app = App::new(Config::default());
        assert!(!app.should_quit());
        app.handle_event(event).await;
        assert!(app.should_quit());
    }
}

#[tokio::test(start_paused = true)]
async fn test_pause_is_idempotent() {
    let mut app = App::new(Config::default().with_tick_interval(TICK));
    app.pause().await;
    app.start();
    app.start();
    time::sleep(TICK + TICK / 2).await;
    assert_eq!(revealed(&app), 1);
    app.pause().await;
    app.pause().await;
    assert_eq!(app.mode(), PlaybackMode::Paused);
}

#[tokio::test(start_paused = true)]
async fn test_custom_script_cycles_on_its_own_length() {
    let script = LogScript::new(vec![
        LogEntry::info("Cloning fixture...", Glyph::Terminal, ColorToken::Zinc),
        LogEntry::success("Done", Glyph::Check, ColorToken::Green),
    ])
    .unwrap();
    let mut app = App::new(
        Config::default()
            .with_tick_interval(TICK)
            .with_script(script),
    );
    assert_eq!(app.player().lock().script().len(), 2);

    let shared = app.player();
    app.start();
    time::sleep(TICK * 2 + TICK / 2).await;
    {
        let player = shared.lock();
        assert!(player.is_fully_revealed());
        assert!(!player.cursor_visible());
    }

    time::sleep(TICK).await;
    let player = shared.lock();
    assert_eq!(player.revealed_count(), 0);
    assert_eq!(player.cycles_completed(), 1);
    assert_eq!(player.current_view()[0].text, "Cloning fixture...");
}
