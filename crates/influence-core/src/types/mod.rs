//! Key types and collection aliases shared across the workspace.

pub mod collections;
pub mod keys;

pub use collections::{FxHashMap, FxHashSet, OrderedSet};
pub use keys::{EdgeKey, NodeKey};
