use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::model::{DownloadStatus, JobId, QueueSnapshot};
use crate::view::{build_view, JobStatusView};
use crate::{countdown, resolve};

/// Per-display-unit tracking state for one job id.
///
/// Holds the latest shared snapshot and whether the 1-second ticker is
/// currently running; everything visible is derived on demand via
/// [`TrackerState::view`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
    job_id: JobId,
    fallback: Option<DownloadStatus>,
    snapshot: Option<Arc<QueueSnapshot>>,
    ticker_running: bool,
}

impl TrackerState {
    pub fn new(job_id: JobId, fallback: Option<DownloadStatus>) -> Self {
        Self {
            job_id,
            fallback,
            snapshot: None,
            ticker_running: false,
        }
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker_running
    }

    /// Recomputes the render view against the current snapshot at `now`.
    pub fn view(&self, now: DateTime<Utc>) -> JobStatusView {
        let record = resolve::resolve(self.snapshot.as_deref(), &self.job_id);
        build_view(record, self.fallback, now)
    }

    /// True while the tracked record has an active countdown at `now`.
    pub fn wants_ticker(&self, now: DateTime<Utc>) -> bool {
        resolve::resolve(self.snapshot.as_deref(), &self.job_id)
            .is_some_and(|record| countdown::has_active_countdown(record, now))
    }

    pub(crate) fn set_snapshot(&mut self, snapshot: Arc<QueueSnapshot>) {
        self.snapshot = Some(snapshot);
    }

    pub(crate) fn retarget(&mut self, job_id: JobId, fallback: Option<DownloadStatus>) {
        self.job_id = job_id;
        self.fallback = fallback;
    }

    pub(crate) fn set_ticker_running(&mut self, running: bool) {
        self.ticker_running = running;
    }
}
