//! Process-wide read-through cache of the latest queue snapshot.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use queuewatch_core::{build_view, resolve, DownloadStatus, JobId, JobStatusView, QueueSnapshot};

/// Shared handle to the latest known snapshot.
///
/// One producer (the push-stream consumer, or a manual refetch) publishes
/// wholesale replacements; any number of display units read the cache or
/// subscribe to change notifications. The cached value is `None` until the
/// first snapshot arrives. Snapshots are shared as `Arc`s and never mutated
/// after publication, so every reader sees a consistent value.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    tx: Arc<watch::Sender<Option<Arc<QueueSnapshot>>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Replaces the cached snapshot wholesale and notifies subscribers.
    pub fn publish(&self, snapshot: QueueSnapshot) {
        watch_logging::watch_debug!("publishing snapshot with {} records", snapshot.len());
        self.tx.send_replace(Some(Arc::new(snapshot)));
    }

    /// Last cached snapshot, without opening a subscription.
    ///
    /// This is the read mode for display units that only want the cache and
    /// must not register another live subscriber.
    pub fn latest(&self) -> Option<Arc<QueueSnapshot>> {
        self.tx.borrow().clone()
    }

    /// Change subscription. Fires only on genuine data mutation (a publish),
    /// never on a clock tick.
    pub fn watch(&self) -> watch::Receiver<Option<Arc<QueueSnapshot>>> {
        self.tx.subscribe()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot resolved view straight from the cache, without subscribing.
pub fn resolve_view(
    store: &SnapshotStore,
    job_id: &JobId,
    fallback: Option<DownloadStatus>,
) -> JobStatusView {
    let snapshot = store.latest();
    build_view(resolve(snapshot.as_deref(), job_id), fallback, Utc::now())
}
