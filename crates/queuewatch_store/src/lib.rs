//! Queuewatch store: process-wide snapshot cache, backend wire decode, and
//! the per-job watcher runtime that executes the core's ticker effects.
mod store;
mod watcher;
mod wire;

pub use store::{resolve_view, SnapshotStore};
pub use watcher::JobWatcher;
pub use wire::{decode_snapshot, WireError, WireJobRecord, WireSnapshot};
