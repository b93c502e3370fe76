use std::sync::Arc;

use crate::model::{DownloadStatus, JobId, QueueSnapshot};

/// Inputs that can change a tracker's view or its ticker lifecycle.
#[derive(Debug, Clone)]
pub enum Msg {
    /// The snapshot store delivered a wholesale replacement snapshot.
    SnapshotReplaced(Arc<QueueSnapshot>),
    /// 1-second countdown tick; the view is recomputed from wall clock.
    Tick,
    /// The displaying unit now tracks a different job.
    Retarget {
        job_id: JobId,
        fallback: Option<DownloadStatus>,
    },
    /// The displaying unit is being removed; release any ticker.
    Detached,
}
