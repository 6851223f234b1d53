use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{EdgeKey, NodeKey};

/// Final result of a cascade run.
///
/// Nodes are listed seeds first (input order, deduplicated), then in
/// activation order. Edges are listed in activation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CascadeOutcome {
    pub influenced_nodes: Vec<NodeKey>,
    pub activated_edges: Vec<EdgeKey>,
    /// Number of rounds the run executed.
    pub rounds: usize,
}

impl CascadeOutcome {
    pub fn is_influenced(&self, node: &NodeKey) -> bool {
        self.influenced_nodes.contains(node)
    }

    pub fn is_activated(&self, edge: &EdgeKey) -> bool {
        self.activated_edges.contains(edge)
    }

    pub fn influenced_count(&self) -> usize {
        self.influenced_nodes.len()
    }

    /// Fraction of `total_nodes` that ended up influenced.
    pub fn coverage(&self, total_nodes: usize) -> f64 {
        if total_nodes == 0 {
            return 0.0;
        }
        self.influenced_nodes.len() as f64 / total_nodes as f64
    }
}
