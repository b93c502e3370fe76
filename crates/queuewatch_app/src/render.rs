//! Line rendering for the demo cards.
//!
//! Two kinds of output line mirror the isolation boundary: card lines come
//! from the view channel (data mutations only), countdown lines from the
//! tick channel.

use queuewatch_core::{DownloadStatus, JobId, JobStatusView};

pub fn card_line(id: &JobId, view: &JobStatusView) -> String {
    let label = match view.status {
        None => "unknown".to_string(),
        Some(DownloadStatus::Available) => "downloaded".to_string(),
        Some(DownloadStatus::Queued) => "in queue".to_string(),
        Some(DownloadStatus::Downloading) => {
            format!("downloading {:.0}%", view.progress.unwrap_or(0.0))
        }
        Some(DownloadStatus::Delayed) => "delayed".to_string(),
        Some(DownloadStatus::Error) => {
            format!("error: {}", view.error.as_deref().unwrap_or("unknown"))
        }
        Some(DownloadStatus::Cancelled) => "cancelled".to_string(),
        Some(DownloadStatus::Done) => "done".to_string(),
    };
    let source = if view.in_queue { "live" } else { "fallback" };
    format!("[card] {id} {label} ({source})")
}

pub fn countdown_line(id: &JobId, remaining: Option<u32>) -> String {
    match remaining {
        Some(seconds) => format!("[badge] {id} waiting {seconds}s..."),
        None => format!("[badge] {id} countdown cleared"),
    }
}
