use crate::types::{EdgeKey, NodeKey};

/// Read-only view of an undirected simple graph.
///
/// Implementations must keep adjacency symmetric and must answer `edge_of`
/// for every pair related by `neighbors_of`. The engine holds the provider
/// immutably for the whole run.
pub trait GraphProvider {
    /// Whether `node` exists in the graph.
    fn contains_node(&self, node: &NodeKey) -> bool;

    /// Neighbors of `node`, in a stable order. Unknown nodes have none.
    fn neighbors_of(&self, node: &NodeKey) -> Vec<NodeKey>;

    /// Key of the edge joining `a` and `b`, in either orientation.
    fn edge_of(&self, a: &NodeKey, b: &NodeKey) -> Option<EdgeKey>;

    /// Number of nodes.
    fn node_count(&self) -> usize;
}

impl<G: GraphProvider + ?Sized> GraphProvider for &G {
    fn contains_node(&self, node: &NodeKey) -> bool {
        (**self).contains_node(node)
    }

    fn neighbors_of(&self, node: &NodeKey) -> Vec<NodeKey> {
        (**self).neighbors_of(node)
    }

    fn edge_of(&self, a: &NodeKey, b: &NodeKey) -> Option<EdgeKey> {
        (**self).edge_of(a, b)
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }
}
