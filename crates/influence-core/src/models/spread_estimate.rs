use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::NodeKey;

/// How often a node ended up influenced across estimation trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NodeFrequency {
    pub node: NodeKey,
    /// Fraction of trials in which the node was influenced, in `[0, 1]`.
    pub frequency: f64,
}

/// Aggregate of many independent cascade runs from the same seeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpreadEstimate {
    pub trials: usize,
    pub mean_influenced: f64,
    pub min_influenced: usize,
    pub max_influenced: usize,
    pub mean_rounds: f64,
    /// Sorted by descending frequency, ties broken by key.
    pub activation_frequency: Vec<NodeFrequency>,
}

impl SpreadEstimate {
    /// Frequency for `node`, or 0.0 if it was never influenced.
    pub fn frequency_of(&self, node: &NodeKey) -> f64 {
        self.activation_frequency
            .iter()
            .find(|f| &f.node == node)
            .map_or(0.0, |f| f.frequency)
    }
}
