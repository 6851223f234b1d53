use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CascadeOutcome, Step, StepKind};
use crate::config::HistoryShape;

/// Ordered steps of one recorded cascade.
///
/// Always starts with an `Initial` step and ends with a `RoundClose` step
/// when at least one round ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CascadeHistory {
    pub shape: HistoryShape,
    pub steps: Vec<Step>,
}

impl CascadeHistory {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn initial(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn terminal(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Number of rounds recorded.
    pub fn round_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind == StepKind::RoundClose)
            .count()
    }

    /// The terminal step as a final-result outcome.
    pub fn to_outcome(&self) -> CascadeOutcome {
        match self.terminal() {
            Some(step) => CascadeOutcome {
                influenced_nodes: step.influenced_nodes.clone(),
                activated_edges: step.influenced_edges.clone(),
                rounds: self.round_count(),
            },
            None => CascadeOutcome::default(),
        }
    }
}
