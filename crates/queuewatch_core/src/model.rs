//! Data model for the download queue: job identifiers, the status sum type,
//! job records, and the partitioned snapshot.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content-hash identifier of a tracked download job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(hash: &str) -> Self {
        Self(hash.to_owned())
    }
}

/// Lifecycle status of a download job.
///
/// Closed enumeration; consumers should match exhaustively rather than carry
/// parallel boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadStatus {
    Available,
    Queued,
    Downloading,
    Delayed,
    Error,
    Cancelled,
    Done,
}

impl DownloadStatus {
    /// Wire/string representation, matching the backend's snake_case tags.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Queued => "queued",
            Self::Downloading => "downloading",
            Self::Delayed => "delayed",
            Self::Error => "error",
            Self::Cancelled => "cancelled",
            Self::Done => "done",
        }
    }

    /// Parses a wire tag. Unknown tags are `None`, never a silent default.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "available" => Some(Self::Available),
            "queued" => Some(Self::Queued),
            "downloading" => Some(Self::Downloading),
            "delayed" => Some(Self::Delayed),
            "error" => Some(Self::Error),
            "cancelled" => Some(Self::Cancelled),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked download job as delivered by the backend.
///
/// All timestamps are absolute instants; countdown state is the
/// (`countdown_seconds`, `countdown_started_at`) pair, which is expected to
/// be present or absent together. A half-present pair is malformed but
/// non-fatal: it simply yields no countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub status: DownloadStatus,
    /// Percentage, meaningful only while `status` is `Downloading`.
    pub progress: Option<f64>,
    /// Message, meaningful only while `status` is `Error`.
    pub error: Option<String>,
    pub queued_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub next_retry_at: Option<DateTime<Utc>>,
    pub countdown_seconds: Option<u32>,
    pub countdown_started_at: Option<DateTime<Utc>>,
}

impl JobRecord {
    /// A record with only identity and status; every optional field empty.
    pub fn new(id: JobId, status: DownloadStatus) -> Self {
        Self {
            id,
            status,
            progress: None,
            error: None,
            queued_at: None,
            started_at: None,
            completed_at: None,
            next_retry_at: None,
            countdown_seconds: None,
            countdown_started_at: None,
        }
    }

    /// Attaches an active countdown to the record.
    pub fn with_countdown(mut self, seconds: u32, started_at: DateTime<Utc>) -> Self {
        self.countdown_seconds = Some(seconds);
        self.countdown_started_at = Some(started_at);
        self
    }
}

/// Immutable partition of all known jobs by lifecycle category.
///
/// A given id is expected to appear in at most one category at any snapshot
/// instant. Snapshots are replaced wholesale by the store, never mutated in
/// place once published.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub available: HashMap<JobId, JobRecord>,
    pub queued: HashMap<JobId, JobRecord>,
    pub downloading: HashMap<JobId, JobRecord>,
    pub delayed: HashMap<JobId, JobRecord>,
    pub error: HashMap<JobId, JobRecord>,
    pub cancelled: HashMap<JobId, JobRecord>,
    pub done: HashMap<JobId, JobRecord>,
}

impl QueueSnapshot {
    /// Fixed category precedence used by the resolver. Acts as the
    /// deterministic tie-break if an upstream producer ever lets one id
    /// appear in more than one category.
    pub const CATEGORY_ORDER: [DownloadStatus; 7] = [
        DownloadStatus::Available,
        DownloadStatus::Queued,
        DownloadStatus::Downloading,
        DownloadStatus::Delayed,
        DownloadStatus::Error,
        DownloadStatus::Cancelled,
        DownloadStatus::Done,
    ];

    pub fn category(&self, status: DownloadStatus) -> &HashMap<JobId, JobRecord> {
        match status {
            DownloadStatus::Available => &self.available,
            DownloadStatus::Queued => &self.queued,
            DownloadStatus::Downloading => &self.downloading,
            DownloadStatus::Delayed => &self.delayed,
            DownloadStatus::Error => &self.error,
            DownloadStatus::Cancelled => &self.cancelled,
            DownloadStatus::Done => &self.done,
        }
    }

    /// Inserts a record into the named category, keyed by its id.
    pub fn insert(&mut self, category: DownloadStatus, record: JobRecord) {
        let id = record.id.clone();
        match category {
            DownloadStatus::Available => self.available.insert(id, record),
            DownloadStatus::Queued => self.queued.insert(id, record),
            DownloadStatus::Downloading => self.downloading.insert(id, record),
            DownloadStatus::Delayed => self.delayed.insert(id, record),
            DownloadStatus::Error => self.error.insert(id, record),
            DownloadStatus::Cancelled => self.cancelled.insert(id, record),
            DownloadStatus::Done => self.done.insert(id, record),
        };
    }

    /// Total number of records across all categories.
    pub fn len(&self) -> usize {
        Self::CATEGORY_ORDER
            .iter()
            .map(|category| self.category(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
