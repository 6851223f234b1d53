//! Undirected simple graph with O(1) key lookup.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use influence_core::constants::DERIVED_EDGE_KEY_SEPARATOR;
use influence_core::errors::GraphError;
use influence_core::models::GraphSummary;
use influence_core::traits::GraphProvider;
use influence_core::types::{EdgeKey, FxHashMap, NodeKey};

/// The underlying petgraph type.
pub type CascadeStableGraph = StableGraph<NodeKey, EdgeKey, Undirected>;

/// Wrapper providing indexed access to an undirected graph.
///
/// Node and edge keys are unique. `StableGraph` reuses freed slots after a
/// removal, so ordering uses a separate insertion sequence rather than the
/// petgraph indices.
#[derive(Debug, Clone)]
pub struct IndexedGraph {
    /// The petgraph stable graph.
    pub graph: CascadeStableGraph,
    /// Map from node key → NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<NodeKey, NodeIndex>,
    edge_index: FxHashMap<EdgeKey, EdgeIndex>,
    node_seq: FxHashMap<NodeIndex, u64>,
    edge_seq: FxHashMap<EdgeIndex, u64>,
    next_seq: u64,
}

impl IndexedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::default(),
            node_index: FxHashMap::default(),
            edge_index: FxHashMap::default(),
            node_seq: FxHashMap::default(),
            edge_seq: FxHashMap::default(),
            next_seq: 0,
        }
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Get or create the node for `key`.
    pub fn ensure_node(&mut self, key: impl Into<NodeKey>) -> NodeIndex {
        let key = key.into();
        if let Some(&idx) = self.node_index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(key.clone());
        let seq = self.bump_seq();
        self.node_seq.insert(idx, seq);
        self.node_index.insert(key, idx);
        idx
    }

    /// Look up a node index by key.
    pub fn get_node(&self, key: &NodeKey) -> Option<NodeIndex> {
        self.node_index.get(key).copied()
    }

    /// Look up an edge index by key.
    pub fn get_edge(&self, key: &EdgeKey) -> Option<EdgeIndex> {
        self.edge_index.get(key).copied()
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// Rejects self-loops, a second edge between the same pair, and a key
    /// already used by another edge. Nothing is added on rejection.
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeKey>,
        target: impl Into<NodeKey>,
        key: impl Into<EdgeKey>,
    ) -> Result<EdgeIndex, GraphError> {
        let source = source.into();
        let target = target.into();
        let key = key.into();
        if source == target {
            return Err(GraphError::SelfLoop {
                node: source.to_string(),
            });
        }
        if self.edge_index.contains_key(&key) {
            return Err(GraphError::DuplicateEdgeKey {
                key: key.to_string(),
                source_node: source.to_string(),
                target_node: target.to_string(),
            });
        }
        if let (Some(a), Some(b)) = (self.get_node(&source), self.get_node(&target)) {
            if self.graph.find_edge(a, b).is_some() {
                return Err(GraphError::DuplicateEdge {
                    source_node: source.to_string(),
                    target_node: target.to_string(),
                });
            }
        }
        let a = self.ensure_node(source);
        let b = self.ensure_node(target);
        let idx = self.graph.add_edge(a, b, key.clone());
        let seq = self.bump_seq();
        self.edge_seq.insert(idx, seq);
        self.edge_index.insert(key, idx);
        Ok(idx)
    }

    /// Add an edge whose key is derived as `"<source>-<target>"`.
    ///
    /// Fails with `DuplicateEdgeKey` when node keys containing the separator
    /// make two pairs derive the same key.
    pub fn connect(
        &mut self,
        source: impl Into<NodeKey>,
        target: impl Into<NodeKey>,
    ) -> Result<EdgeIndex, GraphError> {
        let source = source.into();
        let target = target.into();
        let key = derived_edge_key(&source, &target);
        self.add_edge(source, target, key)
    }

    /// Remove a node and all its edges.
    pub fn remove_node(&mut self, key: &NodeKey) -> bool {
        let Some(idx) = self.node_index.remove(key) else {
            return false;
        };
        let incident: Vec<(EdgeIndex, EdgeKey)> = self
            .graph
            .edges(idx)
            .map(|edge| (edge.id(), edge.weight().clone()))
            .collect();
        for (edge, edge_key) in incident {
            self.edge_seq.remove(&edge);
            self.edge_index.remove(&edge_key);
        }
        self.node_seq.remove(&idx);
        self.graph.remove_node(idx);
        true
    }

    /// All node keys, in insertion order.
    pub fn nodes(&self) -> Vec<NodeKey> {
        let mut indexed: Vec<(u64, &NodeKey)> = self
            .graph
            .node_indices()
            .filter_map(|idx| {
                let key = self.graph.node_weight(idx)?;
                Some((self.node_order(idx), key))
            })
            .collect();
        indexed.sort_by_key(|(seq, _)| *seq);
        indexed.into_iter().map(|(_, k)| k.clone()).collect()
    }

    /// All edge indices, in insertion order.
    pub fn edge_indices_ordered(&self) -> Vec<EdgeIndex> {
        let mut edges: Vec<EdgeIndex> = self.graph.edge_indices().collect();
        edges.sort_by_key(|idx| self.edge_order(*idx));
        edges
    }

    // Nodes or edges added through `graph` directly sort last.
    fn node_order(&self, idx: NodeIndex) -> u64 {
        self.node_seq.get(&idx).copied().unwrap_or(u64::MAX)
    }

    fn edge_order(&self, idx: EdgeIndex) -> u64 {
        self.edge_seq.get(&idx).copied().unwrap_or(u64::MAX)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
        }
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphProvider for IndexedGraph {
    fn contains_node(&self, node: &NodeKey) -> bool {
        self.node_index.contains_key(node)
    }

    /// Neighbors in edge insertion order.
    fn neighbors_of(&self, node: &NodeKey) -> Vec<NodeKey> {
        let Some(idx) = self.get_node(node) else {
            return Vec::new();
        };
        let mut incident: Vec<(u64, NodeIndex)> = self
            .graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (self.edge_order(edge.id()), other)
            })
            .collect();
        incident.sort_by_key(|(seq, _)| *seq);
        incident
            .into_iter()
            .filter_map(|(_, other)| self.graph.node_weight(other).cloned())
            .collect()
    }

    fn edge_of(&self, a: &NodeKey, b: &NodeKey) -> Option<EdgeKey> {
        let a = self.get_node(a)?;
        let b = self.get_node(b)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).cloned()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

/// Edge key used when a source graph carries none.
pub fn derived_edge_key(source: &NodeKey, target: &NodeKey) -> EdgeKey {
    EdgeKey::new(format!(
        "{source}{DERIVED_EDGE_KEY_SEPARATOR}{target}"
    ))
}
