//! Graph construction errors.

use super::error_code::{self, InfluenceErrorCode};

/// Errors raised while building an undirected simple graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("self-loop rejected on node {node}")]
    SelfLoop { node: String },

    #[error("duplicate edge between {source_node} and {target_node}")]
    DuplicateEdge {
        source_node: String,
        target_node: String,
    },

    #[error("edge key {key} already used; rejected for {source_node}-{target_node}")]
    DuplicateEdgeKey {
        key: String,
        source_node: String,
        target_node: String,
    },

    #[error("edge {edge} references unknown node {node}")]
    UnknownNode { edge: String, node: String },
}

impl InfluenceErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
