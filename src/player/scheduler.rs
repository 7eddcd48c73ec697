//! Periodic driver for a [`StagedLogPlayer`].
//!
//! The ticker is a scoped resource: it owns a spawned task that advances the
//! shared player on a fixed period, and it guarantees that no advance happens
//! once it has been stopped or dropped.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::state::{Advance, StagedLogPlayer};

/// Player shared between the ticker task and the renderer
pub type SharedPlayer = Arc<Mutex<StagedLogPlayer>>;

/// Cadence of the landing page terminal demo
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1200);

const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to the periodic advance task
pub struct PlaybackTicker {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
    period: Duration,
}

impl PlaybackTicker {
    /// Spawn the ticker on the current tokio runtime.
    ///
    /// The first advance fires one full `period` after spawning. Every
    /// [`Advance`] is forwarded to `notify` when a sender is supplied; the
    /// task stops on its own if that receiver is dropped.
    pub fn spawn(
        player: SharedPlayer,
        period: Duration,
        notify: Option<mpsc::UnboundedSender<Advance>>,
    ) -> Self {
        let period = period.max(MIN_TICK_INTERVAL);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tracing::debug!(period_ms = period.as_millis() as u64, "Playback ticker started");

            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    _ = interval.tick() => {
                        let step = player.lock().advance();
                        tracing::trace!(?step, "Playback advanced");
                        if let Some(tx) = &notify {
                            if tx.send(step).is_err() {
                                tracing::debug!("Playback listener gone, stopping ticker");
                                break;
                            }
                        }
                    }
                }
            }

            tracing::debug!("Playback ticker stopped");
        });

        Self {
            cancel,
            task: Some(task),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the task and wait until it has exited
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::debug!(error = %e, "Playback ticker task ended abnormally");
            }
        }
    }
}

/// Dropping cancels best-effort: the abort lands at the task's next await,
/// so on a multi-thread runtime a tick already in progress may still apply.
/// Use [`PlaybackTicker::stop`] when no further advance may follow.
impl Drop for PlaybackTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
