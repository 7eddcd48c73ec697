use std::io;
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use parking_lot::Mutex;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::Config;
use crate::lifecycle::{Easing, LifecycleStepper, MotionLoop};
use crate::player::{Advance, PlaybackTicker, SharedPlayer, StagedLogPlayer};
use crate::ui::components::{render_key_hints, LifecycleView, TerminalDemo};
use crate::ui::events::{AppEvent, PlaybackMode};
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};

const PLAYING_HINTS: &[(&str, &str)] = &[("space", "pause"), ("r", "restart"), ("q", "quit")];
const PAUSED_HINTS: &[(&str, &str)] = &[
    ("space", "resume"),
    ("n", "step"),
    ("r", "restart"),
    ("q", "quit"),
];

/// Main application state
pub struct App {
    config: Config,
    player: SharedPlayer,
    /// Present exactly while playback is running
    ticker: Option<PlaybackTicker>,
    lifecycle: LifecycleStepper,
    cursor_blink: MotionLoop,
    mode: PlaybackMode,
    started: Instant,
    should_quit: bool,
    advance_tx: mpsc::UnboundedSender<Advance>,
    advance_rx: mpsc::UnboundedReceiver<Advance>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (advance_tx, advance_rx) = mpsc::unbounded_channel();
        let player = Arc::new(Mutex::new(StagedLogPlayer::new(config.script.clone())));

        Self {
            cursor_blink: MotionLoop::new(config.cursor_blink, Easing::Linear),
            config,
            player,
            ticker: None,
            lifecycle: LifecycleStepper::new(),
            mode: PlaybackMode::Paused,
            started: Instant::now(),
            should_quit: false,
            advance_tx,
            advance_rx,
        }
    }

    /// Replace the randomly seeded lifecycle (deterministic rendering)
    pub fn with_lifecycle(mut self, lifecycle: LifecycleStepper) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    pub fn player(&self) -> SharedPlayer {
        self.player.clone()
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Start the playback ticker if it isn't running
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        self.ticker = Some(PlaybackTicker::spawn(
            self.player.clone(),
            self.config.tick_interval,
            Some(self.advance_tx.clone()),
        ));
        self.mode = PlaybackMode::Playing;
    }

    /// Release the playback ticker; no advance happens after this returns
    pub async fn pause(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop().await;
        }
        self.mode = PlaybackMode::Paused;
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();
        let mut guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        tracing::info!(
            lines = self.config.script.len(),
            tick_ms = self.config.tick_interval.as_millis() as u64,
            "Starting worker demo"
        );
        self.start();

        let result = self.event_loop(&mut terminal).await;

        self.pause().await;
        let restored = guard.restore();
        tracing::info!(
            cycles = self.player.lock().cycles_completed(),
            "Worker demo stopped"
        );

        result?;
        restored
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut input = EventStream::new();
        let mut frames = time::interval(self.config.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        terminal.draw(|f| self.draw(f))?;

        while !self.should_quit {
            let event = tokio::select! {
                _ = frames.tick() => AppEvent::Frame,
                Some(step) = self.advance_rx.recv() => AppEvent::Playback(step),
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(event)) => AppEvent::Input(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => AppEvent::Quit,
                },
            };

            if self.handle_event(event).await {
                terminal.draw(|f| self.draw(f))?;
            }
        }

        Ok(())
    }

    /// Apply an event; returns whether a redraw is needed
    pub async fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Input(Event::Key(key)) => {
                self.handle_key_event(key).await;
                true
            }
            AppEvent::Input(Event::Resize(..)) => true,
            AppEvent::Input(_) => false,
            AppEvent::Playback(step) => {
                tracing::trace!(?step, "Redraw after playback step");
                true
            }
            AppEvent::Frame => true,
            AppEvent::Quit => {
                self.should_quit = true;
                false
            }
        }
    }

    async fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => match self.mode {
                PlaybackMode::Playing => self.pause().await,
                PlaybackMode::Paused => self.start(),
            },
            KeyCode::Char('r') => {
                let was_playing = self.mode == PlaybackMode::Playing;
                self.pause().await;
                self.player.lock().reset();
                if was_playing {
                    self.start();
                }
            }
            KeyCode::Char('n') | KeyCode::Right if self.mode == PlaybackMode::Paused => {
                let step = self.player.lock().advance();
                tracing::debug!(?step, "Manual step");
            }
            _ => {}
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let [main, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(f.area());

        let elapsed = self.started.elapsed();
        let (demo_area, lifecycle_area) = if self.config.show_lifecycle {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(main);
            (left, Some(right))
        } else {
            (main, None)
        };

        {
            let player = self.player.lock();
            TerminalDemo::from_player(&player)
                .title(&self.config.window_title)
                .cursor_color(self.config.cursor_color)
                .blink(self.cursor_blink.first_half(elapsed))
                .render(demo_area, f.buffer_mut());
        }

        if let Some(area) = lifecycle_area {
            let frame = self.lifecycle.frame(elapsed);
            LifecycleView::new(&frame).render(inset(area, 2, 1), f.buffer_mut());
        }

        let hints = match self.mode {
            PlaybackMode::Playing => PLAYING_HINTS,
            PlaybackMode::Paused => PAUSED_HINTS,
        };
        render_key_hints(footer, f.buffer_mut(), hints);
    }
}

fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect::new(
        area.x.saturating_add(horizontal),
        area.y.saturating_add(vertical),
        area.width.saturating_sub(horizontal * 2),
        area.height.saturating_sub(vertical * 2),
    )
}
