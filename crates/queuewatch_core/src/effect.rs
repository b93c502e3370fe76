/// Side effects requested by `update`; executed by the runtime driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Begin 1-second re-evaluation ticks for this tracker.
    StartTicker,
    /// Tear down the running ticker, not merely pause it.
    StopTicker,
}
