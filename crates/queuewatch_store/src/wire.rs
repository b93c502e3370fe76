//! Wire-format decode for backend queue payloads.
//!
//! Records arrive as camelCase JSON with ISO-8601 timestamp strings, keyed by
//! content hash inside each lifecycle category. Decode is lenient by design:
//! an unparseable timestamp drops the field (a dropped countdown timestamp
//! degrades to "no countdown" rather than a surfaced error), and an unknown
//! status tag defers to the owning category. Only a structurally malformed
//! payload is an error, and that error goes to the feed producer, never to a
//! view.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use queuewatch_core::{DownloadStatus, JobId, JobRecord, QueueSnapshot};
use watch_logging::watch_warn;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed queue payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// One job record as sent by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireJobRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub queued_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub next_retry_at: Option<String>,
    #[serde(default)]
    pub countdown_seconds: Option<u32>,
    #[serde(default)]
    pub countdown_started_at: Option<String>,
}

/// Queue payload: lifecycle categories, each a map of content hash to record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireSnapshot {
    #[serde(default)]
    pub available: HashMap<String, WireJobRecord>,
    #[serde(default)]
    pub queued: HashMap<String, WireJobRecord>,
    #[serde(default)]
    pub downloading: HashMap<String, WireJobRecord>,
    #[serde(default)]
    pub delayed: HashMap<String, WireJobRecord>,
    #[serde(default)]
    pub error: HashMap<String, WireJobRecord>,
    #[serde(default)]
    pub cancelled: HashMap<String, WireJobRecord>,
    #[serde(default)]
    pub done: HashMap<String, WireJobRecord>,
}

/// Decodes a JSON queue payload into a core snapshot.
pub fn decode_snapshot(payload: &str) -> Result<QueueSnapshot, WireError> {
    let wire: WireSnapshot = serde_json::from_str(payload)?;
    Ok(wire.into_snapshot())
}

impl WireSnapshot {
    /// Converts into the core snapshot, field by field, leniently.
    pub fn into_snapshot(self) -> QueueSnapshot {
        let Self {
            available,
            queued,
            downloading,
            delayed,
            error,
            cancelled,
            done,
        } = self;
        QueueSnapshot {
            available: convert_category(DownloadStatus::Available, available),
            queued: convert_category(DownloadStatus::Queued, queued),
            downloading: convert_category(DownloadStatus::Downloading, downloading),
            delayed: convert_category(DownloadStatus::Delayed, delayed),
            error: convert_category(DownloadStatus::Error, error),
            cancelled: convert_category(DownloadStatus::Cancelled, cancelled),
            done: convert_category(DownloadStatus::Done, done),
        }
    }
}

fn convert_category(
    category: DownloadStatus,
    records: HashMap<String, WireJobRecord>,
) -> HashMap<JobId, JobRecord> {
    records
        .into_iter()
        .map(|(hash, wire)| {
            let id = JobId::new(hash);
            let record = wire.into_record(id.clone(), category);
            (id, record)
        })
        .collect()
}

impl WireJobRecord {
    /// Converts one wire record. The owning category is authoritative when
    /// the inline status tag is missing or unreadable, so a job never drops
    /// out of the UI because of one bad tag.
    fn into_record(self, id: JobId, category: DownloadStatus) -> JobRecord {
        let status = match self.status.as_deref() {
            Some(tag) => DownloadStatus::parse(tag).unwrap_or_else(|| {
                watch_warn!("job {id}: unknown status tag {tag:?}, using category {category}");
                category
            }),
            None => category,
        };
        JobRecord {
            id,
            status,
            progress: self.progress,
            error: self.error,
            queued_at: parse_instant("queuedAt", self.queued_at.as_deref()),
            started_at: parse_instant("startedAt", self.started_at.as_deref()),
            completed_at: parse_instant("completedAt", self.completed_at.as_deref()),
            next_retry_at: parse_instant("nextRetryAt", self.next_retry_at.as_deref()),
            countdown_seconds: self.countdown_seconds,
            countdown_started_at: parse_instant(
                "countdownStartedAt",
                self.countdown_started_at.as_deref(),
            ),
        }
    }
}

fn parse_instant(field: &str, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(err) => {
            watch_warn!("dropping unparseable {field} timestamp {raw:?}: {err}");
            None
        }
    }
}
