use chrono::{DateTime, Duration, TimeZone, Utc};
use queuewatch_core::{record_remaining, remaining, DownloadStatus, JobId, JobRecord};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap()
}

#[test]
fn remaining_steps_down_once_per_elapsed_second() {
    for k in 0..30 {
        let now = t0() + Duration::seconds(k);
        assert_eq!(remaining(30, t0(), now), Some(30 - k as u32));
    }
}

#[test]
fn remaining_is_none_at_and_after_expiry() {
    assert_eq!(remaining(30, t0(), t0() + Duration::seconds(30)), None);
    assert_eq!(remaining(30, t0(), t0() + Duration::seconds(31)), None);
    assert_eq!(remaining(30, t0(), t0() + Duration::days(2)), None);
}

#[test]
fn sub_second_elapsed_floors_to_whole_seconds() {
    assert_eq!(remaining(30, t0(), t0() + Duration::milliseconds(999)), Some(30));
    assert_eq!(remaining(30, t0(), t0() + Duration::milliseconds(1000)), Some(29));
    assert_eq!(remaining(30, t0(), t0() + Duration::milliseconds(1001)), Some(29));
}

#[test]
fn suspension_gap_reports_full_elapsed_time() {
    // A 40-second pause must show the full real elapsed time on the next
    // evaluation, not resume from where ticking stopped.
    let now = t0() + Duration::seconds(40);
    assert_eq!(remaining(60, t0(), now), Some(20));
}

#[test]
fn start_in_the_future_never_goes_negative() {
    // Clock skew: remaining = max(0, s - elapsed) with a negative elapsed
    // overshoots rather than underflows, and self-corrects as time advances.
    let now = t0() - Duration::seconds(5);
    assert_eq!(remaining(30, t0(), now), Some(35));
}

#[test]
fn half_present_countdown_pair_yields_no_countdown() {
    let mut rec = JobRecord::new(JobId::from("abc"), DownloadStatus::Queued);
    rec.countdown_seconds = Some(30);
    assert_eq!(record_remaining(&rec, t0()), None);

    let mut rec = JobRecord::new(JobId::from("abc"), DownloadStatus::Queued);
    rec.countdown_started_at = Some(t0());
    assert_eq!(record_remaining(&rec, t0()), None);
}

#[test]
fn absent_countdown_pair_yields_no_countdown() {
    let rec = JobRecord::new(JobId::from("abc"), DownloadStatus::Queued);
    assert_eq!(record_remaining(&rec, t0()), None);
}

#[test]
fn active_pair_is_computed_from_start_timestamp() {
    let rec = JobRecord::new(JobId::from("abc"), DownloadStatus::Queued).with_countdown(30, t0());
    assert_eq!(record_remaining(&rec, t0() + Duration::seconds(10)), Some(20));
    assert_eq!(record_remaining(&rec, t0() + Duration::seconds(31)), None);
}
