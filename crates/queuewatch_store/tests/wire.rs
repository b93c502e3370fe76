use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use queuewatch_store::decode_snapshot;

use queuewatch_core::{DownloadStatus, JobId};

fn init_logging() {
    watch_logging::initialize_for_tests();
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap()
}

#[test]
fn decodes_camel_case_payload_with_timestamps() {
    init_logging();
    let payload = r#"{
        "queued": {
            "0a1b2c": {
                "status": "queued",
                "queuedAt": "2024-05-17T12:00:00Z",
                "countdownSeconds": 30,
                "countdownStartedAt": "2024-05-17T12:00:00+00:00"
            }
        },
        "downloading": {
            "d4e5f6": {
                "status": "downloading",
                "progress": 42.5,
                "startedAt": "2024-05-17T11:59:00Z"
            }
        }
    }"#;

    let snapshot = decode_snapshot(payload).expect("payload decodes");
    assert_eq!(snapshot.len(), 2);

    let queued = snapshot.queued.get(&JobId::from("0a1b2c")).expect("queued job");
    assert_eq!(queued.status, DownloadStatus::Queued);
    assert_eq!(queued.queued_at, Some(t0()));
    assert_eq!(queued.countdown_seconds, Some(30));
    assert_eq!(queued.countdown_started_at, Some(t0()));

    let downloading = snapshot
        .downloading
        .get(&JobId::from("d4e5f6"))
        .expect("downloading job");
    assert_eq!(downloading.status, DownloadStatus::Downloading);
    assert_eq!(downloading.progress, Some(42.5));
}

#[test]
fn malformed_timestamp_is_dropped_not_fatal() {
    init_logging();
    let payload = r#"{
        "queued": {
            "0a1b2c": {
                "status": "queued",
                "countdownSeconds": 30,
                "countdownStartedAt": "yesterday-ish"
            }
        }
    }"#;

    let snapshot = decode_snapshot(payload).expect("payload decodes");
    let record = snapshot.queued.get(&JobId::from("0a1b2c")).expect("record kept");

    // Half a countdown pair remains, which downstream treats as no countdown.
    assert_eq!(record.countdown_seconds, Some(30));
    assert_eq!(record.countdown_started_at, None);
}

#[test]
fn unknown_status_tag_defers_to_owning_category() {
    init_logging();
    let payload = r#"{
        "delayed": {
            "0a1b2c": { "status": "paused" }
        }
    }"#;

    let snapshot = decode_snapshot(payload).expect("payload decodes");
    let record = snapshot.delayed.get(&JobId::from("0a1b2c")).expect("record kept");
    assert_eq!(record.status, DownloadStatus::Delayed);
}

#[test]
fn missing_status_tag_uses_owning_category() {
    init_logging();
    let payload = r#"{
        "error": {
            "0a1b2c": { "error": "rate limited" }
        }
    }"#;

    let snapshot = decode_snapshot(payload).expect("payload decodes");
    let record = snapshot.error.get(&JobId::from("0a1b2c")).expect("record kept");
    assert_eq!(record.status, DownloadStatus::Error);
    assert_eq!(record.error.as_deref(), Some("rate limited"));
}

#[test]
fn empty_payload_decodes_to_empty_snapshot() {
    init_logging();
    let snapshot = decode_snapshot("{}").expect("payload decodes");
    assert!(snapshot.is_empty());
}

#[test]
fn structurally_malformed_payload_is_an_error() {
    init_logging();
    assert!(decode_snapshot("[1, 2, 3]").is_err());
    assert!(decode_snapshot("not json").is_err());
}

#[test]
fn timezone_offsets_normalize_to_utc() {
    init_logging();
    let payload = r#"{
        "queued": {
            "0a1b2c": {
                "countdownSeconds": 30,
                "countdownStartedAt": "2024-05-17T14:00:00+02:00"
            }
        }
    }"#;

    let snapshot = decode_snapshot(payload).expect("payload decodes");
    let record = snapshot.queued.get(&JobId::from("0a1b2c")).expect("record");
    assert_eq!(record.countdown_started_at, Some(t0()));
}
