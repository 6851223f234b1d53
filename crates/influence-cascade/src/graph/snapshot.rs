//! Serializable node/edge lists for building an `IndexedGraph`.
//!
//! This is a plain serde model, not a GEXF or GraphML reader: whatever
//! parses those formats hands over nodes and edges in this shape.

use serde::{Deserialize, Serialize};

use influence_core::errors::GraphError;
use influence_core::types::{EdgeKey, NodeKey};

use super::indexed_graph::{derived_edge_key, IndexedGraph};

/// One undirected edge of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    /// Explicit edge key. Derived from the endpoints when absent.
    #[serde(default)]
    pub key: Option<EdgeKey>,
    pub source: NodeKey,
    pub target: NodeKey,
}

/// Full node and edge listing of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeKey>,
    pub edges: Vec<SnapshotEdge>,
}

impl GraphSnapshot {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl IndexedGraph {
    /// Build a graph from a snapshot. Every edge endpoint must be listed in
    /// `nodes`.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self, GraphError> {
        let mut graph = IndexedGraph::new();
        for node in &snapshot.nodes {
            graph.ensure_node(node.clone());
        }
        for edge in &snapshot.edges {
            let key = edge
                .key
                .clone()
                .unwrap_or_else(|| derived_edge_key(&edge.source, &edge.target));
            for endpoint in [&edge.source, &edge.target] {
                if graph.get_node(endpoint).is_none() {
                    return Err(GraphError::UnknownNode {
                        edge: key.to_string(),
                        node: endpoint.to_string(),
                    });
                }
            }
            graph.add_edge(edge.source.clone(), edge.target.clone(), key)?;
        }
        Ok(graph)
    }

    /// Snapshot of the current graph, nodes and edges in insertion order.
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let edges = self
            .edge_indices_ordered()
            .into_iter()
            .filter_map(|idx| {
                let (a, b) = self.graph.edge_endpoints(idx)?;
                Some(SnapshotEdge {
                    key: self.graph.edge_weight(idx).cloned(),
                    source: self.graph.node_weight(a)?.clone(),
                    target: self.graph.node_weight(b)?.clone(),
                })
            })
            .collect();
        GraphSnapshot {
            nodes: self.nodes(),
            edges,
        }
    }
}
