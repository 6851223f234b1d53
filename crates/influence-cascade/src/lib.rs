//! # influence-cascade
//!
//! Independent Cascade diffusion over an undirected graph.
//! Final-result and step-recording runs, history replay, and a parallel
//! Monte-Carlo spread estimator, all over the `GraphProvider` seam.

pub mod cascade;
pub mod engine;
pub mod estimate;
pub mod graph;
pub mod random;
pub mod replay;

pub use cascade::{run_cascade, run_cascade_with_history};
pub use engine::{CascadeEngine, EngineConfig};
pub use estimate::estimate_spread;
pub use graph::{GraphSnapshot, IndexedGraph};
pub use random::{RngSource, ScriptedSource};
pub use replay::HistoryCursor;
