//! Event payloads. Counts only, so handlers never hold on to run state.

/// A run passed validation and is about to execute its first round.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStartedEvent {
    pub seed_count: usize,
    pub probability: f64,
    pub record_history: bool,
}

/// One round finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundCompletedEvent {
    pub round: usize,
    pub candidates: usize,
    pub activated: usize,
    pub total_influenced: usize,
}

/// A run returned successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCompletedEvent {
    pub rounds: usize,
    pub influenced: usize,
    pub activated_edges: usize,
}
