//! Demo wiring: one watcher per displayed job, printed as it updates.

use queuewatch_core::{DownloadStatus, JobId};
use queuewatch_store::{JobWatcher, SnapshotStore};
use tokio::time::{sleep, Duration};
use watch_logging::watch_info;

use crate::{feed, render};

pub async fn run() {
    let store = SnapshotStore::new();
    tokio::spawn(feed::run(store.clone()));

    let cards = [
        (feed::WAITING_JOB, None),
        (feed::ACTIVE_JOB, None),
        // Never queued; the search result said it is already on disk.
        (feed::FALLBACK_ONLY_JOB, Some(DownloadStatus::Available)),
    ];

    let mut displays = Vec::new();
    for (hash, fallback) in cards {
        let job_id = JobId::from(hash);
        let watcher = JobWatcher::spawn(&store, job_id.clone(), fallback);
        displays.push(tokio::spawn(display(job_id, watcher)));
    }

    sleep(Duration::from_secs(16)).await;
    watch_info!("demo window over, dropping watchers");
    for display in displays {
        display.abort();
    }
}

/// Drives one card. The card line is reprinted only when the view channel
/// fires; the countdown badge follows the per-second channel.
async fn display(job_id: JobId, watcher: JobWatcher) {
    let mut view_rx = watcher.view();
    let mut countdown_rx = watcher.countdown();

    println!("{}", render::card_line(&job_id, &view_rx.borrow_and_update()));

    loop {
        tokio::select! {
            changed = view_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = view_rx.borrow_and_update().clone();
                println!("{}", render::card_line(&job_id, &view));
            }
            changed = countdown_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let remaining = *countdown_rx.borrow_and_update();
                println!("{}", render::countdown_line(&job_id, remaining));
            }
        }
    }
}
