use queuewatch_core::{resolve, DownloadStatus, JobId, JobRecord, QueueSnapshot};

fn init_logging() {
    watch_logging::initialize_for_tests();
}

fn record(hash: &str, status: DownloadStatus) -> JobRecord {
    JobRecord::new(JobId::from(hash), status)
}

fn single(category: DownloadStatus, rec: JobRecord) -> QueueSnapshot {
    let mut snapshot = QueueSnapshot::default();
    snapshot.insert(category, rec);
    snapshot
}

#[test]
fn absent_snapshot_resolves_to_none() {
    init_logging();
    assert!(resolve(None, &JobId::from("abc")).is_none());
}

#[test]
fn unknown_id_resolves_to_none() {
    init_logging();
    let snapshot = single(DownloadStatus::Queued, record("abc", DownloadStatus::Queued));
    assert!(resolve(Some(&snapshot), &JobId::from("other")).is_none());
}

#[test]
fn record_is_found_in_every_category() {
    init_logging();
    for category in QueueSnapshot::CATEGORY_ORDER {
        let snapshot = single(category, record("abc", category));
        let resolved = resolve(Some(&snapshot), &JobId::from("abc")).expect("record");
        assert_eq!(resolved.status, category);
        assert_eq!(resolved.id, JobId::from("abc"));
    }
}

#[test]
fn duplicate_membership_uses_category_precedence() {
    init_logging();
    // Upstream invariant violation: same id in two categories. The earlier
    // category in the fixed order wins deterministically.
    let mut snapshot = QueueSnapshot::default();
    snapshot.insert(DownloadStatus::Done, record("abc", DownloadStatus::Done));
    snapshot.insert(DownloadStatus::Queued, record("abc", DownloadStatus::Queued));

    let resolved = resolve(Some(&snapshot), &JobId::from("abc")).expect("record");
    assert_eq!(resolved.status, DownloadStatus::Queued);

    let mut snapshot = QueueSnapshot::default();
    snapshot.insert(DownloadStatus::Queued, record("abc", DownloadStatus::Queued));
    snapshot.insert(
        DownloadStatus::Available,
        record("abc", DownloadStatus::Available),
    );

    let resolved = resolve(Some(&snapshot), &JobId::from("abc")).expect("record");
    assert_eq!(resolved.status, DownloadStatus::Available);
}

#[test]
fn resolve_is_idempotent_on_unmutated_snapshot() {
    init_logging();
    let snapshot = single(
        DownloadStatus::Downloading,
        record("abc", DownloadStatus::Downloading),
    );
    let id = JobId::from("abc");

    let first = resolve(Some(&snapshot), &id);
    let second = resolve(Some(&snapshot), &id);
    assert_eq!(first, second);
}

#[test]
fn exclusive_membership_is_order_independent() {
    init_logging();
    // With exactly one owning category the precedence order is irrelevant:
    // whichever category holds the record, that record is returned.
    for category in QueueSnapshot::CATEGORY_ORDER {
        let mut snapshot = QueueSnapshot::default();
        snapshot.insert(category, record("abc", category));
        for other in QueueSnapshot::CATEGORY_ORDER {
            if other != category {
                snapshot.insert(other, record("unrelated", other));
            }
        }
        let resolved = resolve(Some(&snapshot), &JobId::from("abc")).expect("record");
        assert_eq!(resolved.status, category);
    }
}
