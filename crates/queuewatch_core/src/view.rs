//! Render-friendly derived view of one job's live status.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::countdown;
use crate::model::{DownloadStatus, JobRecord};

/// What a display unit needs to draw one job.
///
/// Recomputed on every read, never persisted, never mutated in place. The
/// raw countdown fields are carried alongside the derived remaining value
/// for callers that need the source timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobStatusView {
    /// Live record status, else the caller's fallback, else `None` (unknown).
    pub status: Option<DownloadStatus>,
    pub progress: Option<f64>,
    pub error: Option<String>,
    pub queued_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub next_retry_at: Option<DateTime<Utc>>,
    pub countdown_seconds: Option<u32>,
    pub countdown_started_at: Option<DateTime<Utc>>,
    pub remaining_countdown: Option<u32>,
    /// True iff a concrete record, not merely a fallback, was resolved.
    pub in_queue: bool,
}

impl JobStatusView {
    pub fn is_available(&self) -> bool {
        self.status == Some(DownloadStatus::Available)
    }

    pub fn is_queued(&self) -> bool {
        self.status == Some(DownloadStatus::Queued)
    }

    pub fn is_downloading(&self) -> bool {
        self.status == Some(DownloadStatus::Downloading)
    }

    pub fn is_delayed(&self) -> bool {
        self.status == Some(DownloadStatus::Delayed)
    }

    pub fn is_error(&self) -> bool {
        self.status == Some(DownloadStatus::Error)
    }
}

/// Builds the view for a resolved record, a caller fallback, or nothing.
///
/// Pure and total: absence of data degrades to "unknown" (`None` status, no
/// countdown), never to a failure. A fallback produces a synthetic
/// status-only view with no progress or countdown fields.
pub fn build_view(
    record: Option<&JobRecord>,
    fallback: Option<DownloadStatus>,
    now: DateTime<Utc>,
) -> JobStatusView {
    match record {
        Some(record) => JobStatusView {
            status: Some(record.status),
            progress: record.progress,
            error: record.error.clone(),
            queued_at: record.queued_at,
            started_at: record.started_at,
            completed_at: record.completed_at,
            next_retry_at: record.next_retry_at,
            countdown_seconds: record.countdown_seconds,
            countdown_started_at: record.countdown_started_at,
            remaining_countdown: countdown::record_remaining(record, now),
            in_queue: true,
        },
        None => JobStatusView {
            status: fallback,
            ..JobStatusView::default()
        },
    }
}
