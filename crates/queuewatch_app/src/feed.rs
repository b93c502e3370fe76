//! Simulated push feed for the demo.
//!
//! Replays a scripted download lifecycle into the snapshot store the way an
//! event-stream consumer would: each push replaces the whole snapshot. The
//! real transport is an external collaborator; this module stands in for it.

use chrono::{Duration as ChronoDuration, Utc};
use queuewatch_core::{DownloadStatus, JobId, JobRecord, QueueSnapshot};
use queuewatch_store::SnapshotStore;
use tokio::time::{sleep, Duration};
use watch_logging::watch_info;

/// Content hashes of the demo jobs. The third never enters the queue, so its
/// card renders purely from the caller-supplied fallback status.
pub const WAITING_JOB: &str = "3f2ab01d9c7e5544";
pub const ACTIVE_JOB: &str = "87cd10aa52e09b13";
pub const FALLBACK_ONLY_JOB: &str = "f00dbeef00000001";

pub async fn run(store: SnapshotStore) {
    watch_info!("demo feed starting");

    // One job waiting out a rate-limit countdown, one already downloading.
    let mut snapshot = QueueSnapshot::default();
    snapshot.insert(
        DownloadStatus::Queued,
        JobRecord::new(JobId::from(WAITING_JOB), DownloadStatus::Queued)
            .with_countdown(8, Utc::now()),
    );
    snapshot.insert(DownloadStatus::Downloading, downloading(ACTIVE_JOB, 12.0));
    store.publish(snapshot);

    // Progress pushes for the active job while the other counts down.
    for progress in [37.0, 64.0, 92.0] {
        sleep(Duration::from_secs(3)).await;
        let mut snapshot = QueueSnapshot::default();
        snapshot.insert(
            DownloadStatus::Queued,
            JobRecord::new(JobId::from(WAITING_JOB), DownloadStatus::Queued)
                .with_countdown(8, Utc::now() - ChronoDuration::seconds(3)),
        );
        snapshot.insert(DownloadStatus::Downloading, downloading(ACTIVE_JOB, progress));
        store.publish(snapshot);
    }

    // Countdown elapsed server-side: the waiting job starts downloading and
    // the active one completes.
    sleep(Duration::from_secs(3)).await;
    let mut snapshot = QueueSnapshot::default();
    snapshot.insert(DownloadStatus::Downloading, downloading(WAITING_JOB, 5.0));
    let mut done = JobRecord::new(JobId::from(ACTIVE_JOB), DownloadStatus::Done);
    done.completed_at = Some(Utc::now());
    snapshot.insert(DownloadStatus::Done, done);
    store.publish(snapshot);

    watch_info!("demo feed finished");
}

fn downloading(hash: &str, progress: f64) -> JobRecord {
    let mut record = JobRecord::new(JobId::from(hash), DownloadStatus::Downloading);
    record.progress = Some(progress);
    record.started_at = Some(Utc::now());
    record
}
