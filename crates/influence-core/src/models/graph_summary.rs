use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Node and edge totals of a graph snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
}
