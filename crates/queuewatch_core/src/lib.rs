//! Queuewatch core: pure status resolution, countdown arithmetic, and
//! view-model helpers for push-driven download job tracking.
mod countdown;
mod effect;
mod model;
mod msg;
mod resolve;
mod state;
mod update;
mod view;

pub use countdown::{has_active_countdown, record_remaining, remaining};
pub use effect::Effect;
pub use model::{DownloadStatus, JobId, JobRecord, QueueSnapshot};
pub use msg::Msg;
pub use resolve::resolve;
pub use state::TrackerState;
pub use update::update;
pub use view::{build_view, JobStatusView};
