//! Snapshots of a recorded cascade.
//!
//! A step sorts every offered node (and edge) into exactly one of three
//! classes. Nodes never offered and not seeded belong to none of them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{EdgeKey, NodeKey};

/// Position of a step within the round structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Seeds only, before any round.
    Initial,
    /// Candidates of the round are offered but not yet resolved.
    RoundOpen,
    /// Candidates of the round are resolved into influenced / not influenced.
    RoundClose,
}

/// Classification of a node or edge in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NodeClass {
    Influenced,
    Influencing,
    NotInfluenced,
}

/// Immutable snapshot at a round boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Step {
    pub kind: StepKind,
    /// 0 for the initial step, otherwise the 1-based round.
    pub round: usize,
    pub influenced_nodes: Vec<NodeKey>,
    pub influenced_edges: Vec<EdgeKey>,
    pub influencing_nodes: Vec<NodeKey>,
    pub influencing_edges: Vec<EdgeKey>,
    pub not_influenced_nodes: Vec<NodeKey>,
    pub not_influenced_edges: Vec<EdgeKey>,
}

impl Step {
    /// Step holding the seeds alone.
    pub fn initial(seeds: Vec<NodeKey>) -> Self {
        Self {
            kind: StepKind::Initial,
            round: 0,
            influenced_nodes: seeds,
            influenced_edges: Vec::new(),
            influencing_nodes: Vec::new(),
            influencing_edges: Vec::new(),
            not_influenced_nodes: Vec::new(),
            not_influenced_edges: Vec::new(),
        }
    }

    pub fn classify_node(&self, node: &NodeKey) -> Option<NodeClass> {
        if self.influenced_nodes.contains(node) {
            Some(NodeClass::Influenced)
        } else if self.influencing_nodes.contains(node) {
            Some(NodeClass::Influencing)
        } else if self.not_influenced_nodes.contains(node) {
            Some(NodeClass::NotInfluenced)
        } else {
            None
        }
    }

    pub fn classify_edge(&self, edge: &EdgeKey) -> Option<NodeClass> {
        if self.influenced_edges.contains(edge) {
            Some(NodeClass::Influenced)
        } else if self.influencing_edges.contains(edge) {
            Some(NodeClass::Influencing)
        } else if self.not_influenced_edges.contains(edge) {
            Some(NodeClass::NotInfluenced)
        } else {
            None
        }
    }

    /// Whether the step resolves a round (or is the seed-only step).
    pub fn is_resolved(&self) -> bool {
        self.kind != StepKind::RoundOpen
    }
}
