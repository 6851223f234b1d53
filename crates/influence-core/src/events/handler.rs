use super::types::*;

/// Trait for observing cascade runs.
///
/// All methods have no-op defaults, so handlers only override the events
/// they care about.
pub trait CascadeEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_round_completed(&self, _event: &RoundCompletedEvent) {}
    fn on_run_completed(&self, _event: &RunCompletedEvent) {}
}
