use chrono::{DateTime, Utc};

use crate::{Effect, Msg, TrackerState};

/// Pure update function: applies a message to state and returns any effects.
///
/// `now` is supplied by the caller so that the active-countdown condition is
/// evaluated against the same instant the driver renders with. After every
/// message the desired ticker state (record resolved and countdown still
/// running) is reconciled with the running flag, emitting at most one
/// start/stop effect; `Detached` unconditionally stops.
pub fn update(
    mut state: TrackerState,
    msg: Msg,
    now: DateTime<Utc>,
) -> (TrackerState, Vec<Effect>) {
    let effects = match msg {
        Msg::SnapshotReplaced(snapshot) => {
            state.set_snapshot(snapshot);
            reconcile_ticker(&mut state, now)
        }
        Msg::Retarget { job_id, fallback } => {
            state.retarget(job_id, fallback);
            reconcile_ticker(&mut state, now)
        }
        Msg::Tick => reconcile_ticker(&mut state, now),
        Msg::Detached => {
            if state.ticker_running() {
                state.set_ticker_running(false);
                vec![Effect::StopTicker]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}

fn reconcile_ticker(state: &mut TrackerState, now: DateTime<Utc>) -> Vec<Effect> {
    match (state.ticker_running(), state.wants_ticker(now)) {
        (false, true) => {
            state.set_ticker_running(true);
            vec![Effect::StartTicker]
        }
        (true, false) => {
            state.set_ticker_running(false);
            vec![Effect::StopTicker]
        }
        _ => Vec::new(),
    }
}
