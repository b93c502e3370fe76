//! Wall-clock countdown arithmetic.
//!
//! Remaining time is always derived from the absolute start timestamp, never
//! from a decremented local counter, so suspended tabs, timer drift, and
//! delayed evaluations self-correct on the next call.

use chrono::{DateTime, Utc};

use crate::model::JobRecord;

/// Seconds left of a countdown, or `None` once it has fully elapsed.
///
/// `None` means "no countdown to display," not an error. Elapsed time is
/// floored to whole seconds, so the value steps down exactly once per
/// elapsed second and reaches `None` the instant real elapsed time catches
/// up with the duration.
pub fn remaining(
    countdown_seconds: u32,
    started_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<u32> {
    let elapsed = (now - started_at).num_milliseconds().div_euclid(1000);
    let left = i64::from(countdown_seconds) - elapsed;
    if left > 0 {
        Some(u32::try_from(left).unwrap_or(u32::MAX))
    } else {
        None
    }
}

/// Remaining countdown for a record, or `None` when the countdown pair is
/// absent, half-present (malformed but non-fatal), or already elapsed.
pub fn record_remaining(record: &JobRecord, now: DateTime<Utc>) -> Option<u32> {
    let seconds = record.countdown_seconds?;
    let started_at = record.countdown_started_at?;
    remaining(seconds, started_at, now)
}

/// True while the record should drive a 1-second re-evaluation ticker.
pub fn has_active_countdown(record: &JobRecord, now: DateTime<Utc>) -> bool {
    record_remaining(record, now).is_some()
}
