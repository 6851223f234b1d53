//! In-memory graph snapshot backed by `petgraph`.

pub mod indexed_graph;
pub mod snapshot;

pub use indexed_graph::{CascadeStableGraph, IndexedGraph};
pub use snapshot::{GraphSnapshot, SnapshotEdge};
