//! Per-job driver tying the snapshot store to the core tracker.
//!
//! Each watcher owns one `TrackerState`, executes the core's ticker effects,
//! and fans out through two channels: a view channel that fires only on
//! genuine data mutation, and a countdown channel that additionally follows
//! the 1-second tick. A card widget subscribes to the view channel; only the
//! countdown badge subscribes to the tick channel, so per-second redraw cost
//! is bounded by the number of currently counting-down jobs.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Duration, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use queuewatch_core::{
    update, DownloadStatus, Effect, JobId, JobStatusView, Msg, QueueSnapshot, TrackerState,
};
use watch_logging::watch_debug;

use crate::store::SnapshotStore;

enum Command {
    Retarget {
        job_id: JobId,
        fallback: Option<DownloadStatus>,
    },
}

/// Handle to a spawned job watcher. Dropping it tears the watcher down,
/// ticker included.
pub struct JobWatcher {
    view_rx: watch::Receiver<JobStatusView>,
    countdown_rx: watch::Receiver<Option<u32>>,
    command_tx: mpsc::UnboundedSender<Command>,
    cancel: CancellationToken,
}

impl JobWatcher {
    /// Spawns a watcher for `job_id` against the shared store.
    ///
    /// The initial view is seeded from the store's cached snapshot, so a
    /// late-mounting display unit does not wait for the next push update.
    pub fn spawn(store: &SnapshotStore, job_id: JobId, fallback: Option<DownloadStatus>) -> Self {
        let mut store_rx = store.watch();
        let now = Utc::now();

        let mut state = TrackerState::new(job_id, fallback);
        let mut pending = Vec::new();
        if let Some(snapshot) = store_rx.borrow_and_update().clone() {
            let (seeded, effects) = update(state, Msg::SnapshotReplaced(snapshot), now);
            state = seeded;
            pending = effects;
        }

        let view = state.view(now);
        let (view_tx, view_rx) = watch::channel(view.clone());
        let (countdown_tx, countdown_rx) = watch::channel(view.remaining_countdown);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let worker = Worker {
            state,
            store_rx,
            command_rx,
            view_tx,
            countdown_tx,
            ticker: None,
            cancel: cancel.clone(),
        };
        tokio::spawn(worker.run(pending));

        Self {
            view_rx,
            countdown_rx,
            command_tx,
            cancel,
        }
    }

    /// Snapshot-derived view channel; updates only when the data changes.
    pub fn view(&self) -> watch::Receiver<JobStatusView> {
        self.view_rx.clone()
    }

    /// Countdown channel; notified on every tick while a countdown runs and
    /// whenever a snapshot change moves the remaining value.
    pub fn countdown(&self) -> watch::Receiver<Option<u32>> {
        self.countdown_rx.clone()
    }

    /// Re-points the watcher at a different job id; any running ticker is
    /// torn down and re-evaluated against the new target.
    pub fn retarget(&self, job_id: JobId, fallback: Option<DownloadStatus>) {
        let _ = self.command_tx.send(Command::Retarget { job_id, fallback });
    }
}

impl Drop for JobWatcher {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct Worker {
    state: TrackerState,
    store_rx: watch::Receiver<Option<Arc<QueueSnapshot>>>,
    command_rx: mpsc::UnboundedReceiver<Command>,
    view_tx: watch::Sender<JobStatusView>,
    countdown_tx: watch::Sender<Option<u32>>,
    ticker: Option<Interval>,
    cancel: CancellationToken,
}

impl Worker {
    async fn run(mut self, pending: Vec<Effect>) {
        for effect in pending {
            self.apply_effect(effect);
        }

        loop {
            tokio::select! {
                () = self.cancel.cancelled() => break,
                changed = self.store_rx.changed() => {
                    if changed.is_err() {
                        // Store dropped; nothing further can arrive.
                        break;
                    }
                    let snapshot = self.store_rx.borrow_and_update().clone();
                    let Some(snapshot) = snapshot else { continue };
                    self.step(Msg::SnapshotReplaced(snapshot), true);
                }
                command = self.command_rx.recv() => {
                    if let Some(Command::Retarget { job_id, fallback }) = command {
                        self.step(Msg::Retarget { job_id, fallback }, true);
                    }
                }
                () = tick(&mut self.ticker) => {
                    self.step(Msg::Tick, false);
                }
            }
        }

        // Unmount path: mirror Msg::Detached so the ticker teardown goes
        // through the same state machine as every other transition.
        let (state, effects) = update(self.state.clone(), Msg::Detached, Utc::now());
        self.state = state;
        for effect in effects {
            self.apply_effect(effect);
        }
        watch_debug!("watcher for job {} detached", self.state.job_id());
    }

    fn step(&mut self, msg: Msg, data_mutation: bool) {
        let now = Utc::now();
        let (state, effects) = update(self.state.clone(), msg, now);
        self.state = state;
        for effect in effects {
            self.apply_effect(effect);
        }

        let view = self.state.view(now);
        let remaining = view.remaining_countdown;
        if data_mutation {
            self.view_tx.send_if_modified(|current| {
                if *current == view {
                    false
                } else {
                    *current = view;
                    true
                }
            });
        }
        // The countdown channel is notified on every tick, even when the
        // floored value has not moved yet; subscribers are exactly the
        // widgets that want per-second wakeups.
        let _ = self.countdown_tx.send(remaining);
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartTicker => {
                let start = time::Instant::now() + Duration::from_secs(1);
                let mut ticker = time::interval_at(start, Duration::from_secs(1));
                // Missed ticks self-correct: the value is wall-clock derived.
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                self.ticker = Some(ticker);
                watch_debug!("ticker started for job {}", self.state.job_id());
            }
            Effect::StopTicker => {
                self.ticker = None;
                watch_debug!("ticker stopped for job {}", self.state.job_id());
            }
        }
    }
}

async fn tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
