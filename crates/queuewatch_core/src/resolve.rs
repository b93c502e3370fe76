//! Status resolution over a queue snapshot.

use crate::model::{JobId, JobRecord, QueueSnapshot};

/// Looks up the current record for `id`.
///
/// Categories are scanned in [`QueueSnapshot::CATEGORY_ORDER`]; the first hit
/// wins, which doubles as the deterministic tie-break should an id ever
/// appear in more than one category. A snapshot that has not loaded yet
/// resolves to `None` rather than failing. Side-effect-free and safe to call
/// on every render.
pub fn resolve<'a>(snapshot: Option<&'a QueueSnapshot>, id: &JobId) -> Option<&'a JobRecord> {
    let snapshot = snapshot?;
    QueueSnapshot::CATEGORY_ORDER
        .iter()
        .find_map(|category| snapshot.category(*category).get(id))
}
