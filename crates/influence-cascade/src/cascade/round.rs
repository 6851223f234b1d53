//! Run context and the per-round step function.

use influence_core::errors::{CascadeError, CascadeResult};
use influence_core::traits::{GraphProvider, UniformSource};
use influence_core::types::{EdgeKey, FxHashSet, NodeKey, OrderedSet};

/// Whether a draw activates a candidate. A probability of zero or below
/// never activates, even on a draw of exactly 0.0.
pub fn activates(draw: f64, probability: f64) -> bool {
    probability > 0.0 && draw <= probability
}

/// Reject non-finite probabilities and seeds missing from the graph.
pub fn validate_input<G: GraphProvider + ?Sized>(
    graph: &G,
    seeds: &[NodeKey],
    probability: f64,
) -> CascadeResult<()> {
    if !probability.is_finite() {
        return Err(CascadeError::InvalidProbability { value: probability });
    }
    if let Some(missing) = seeds.iter().find(|s| !graph.contains_node(s)) {
        return Err(CascadeError::UnknownSeed {
            node: missing.to_string(),
        });
    }
    Ok(())
}

/// One influence attempt: `from` offered influence to `node` over `edge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub from: NodeKey,
    pub node: NodeKey,
    pub edge: EdgeKey,
    pub activated: bool,
}

/// Everything that happened in one round, in offer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: usize,
    pub offers: Vec<Offer>,
}

impl RoundReport {
    pub fn candidate_nodes(&self) -> impl Iterator<Item = &NodeKey> {
        self.offers.iter().map(|o| &o.node)
    }

    pub fn candidate_edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.offers.iter().map(|o| &o.edge)
    }

    pub fn activated(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|o| o.activated)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|o| !o.activated)
    }

    pub fn activated_count(&self) -> usize {
        self.activated().count()
    }

    /// A round without activations ends the run.
    pub fn is_terminal(&self) -> bool {
        self.activated_count() == 0
    }
}

/// State owned by a single cascade run.
pub struct RunContext<'g, G: GraphProvider + ?Sized> {
    graph: &'g G,
    probability: f64,
    influenced: OrderedSet<NodeKey>,
    activated_edges: OrderedSet<EdgeKey>,
    visited: FxHashSet<NodeKey>,
    frontier: Vec<NodeKey>,
    rounds: usize,
    round_limit: usize,
}

impl<'g, G: GraphProvider + ?Sized> RunContext<'g, G> {
    /// Validate input and seed the run. Duplicate seeds collapse to one.
    pub fn new(graph: &'g G, seeds: &[NodeKey], probability: f64) -> CascadeResult<Self> {
        validate_input(graph, seeds, probability)?;
        let influenced: OrderedSet<NodeKey> = seeds.iter().cloned().collect();
        let frontier = influenced.as_slice().to_vec();
        Ok(Self {
            graph,
            probability,
            influenced,
            activated_edges: OrderedSet::new(),
            visited: FxHashSet::default(),
            frontier,
            rounds: 0,
            round_limit: graph.node_count().max(1),
        })
    }

    /// True while the frontier still has nodes to spread from.
    pub fn has_frontier(&self) -> bool {
        !self.frontier.is_empty()
    }

    pub fn influenced(&self) -> &OrderedSet<NodeKey> {
        &self.influenced
    }

    pub fn activated_edges(&self) -> &OrderedSet<EdgeKey> {
        &self.activated_edges
    }

    pub fn visited(&self) -> &FxHashSet<NodeKey> {
        &self.visited
    }

    pub fn frontier(&self) -> &[NodeKey] {
        &self.frontier
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Run one round over the current frontier.
    ///
    /// Draws exactly one value per candidate, in frontier order and then
    /// neighbor order.
    pub fn run_round(&mut self, rng: &mut dyn UniformSource) -> CascadeResult<RoundReport> {
        if self.rounds >= self.round_limit {
            return Err(CascadeError::RoundLimitExceeded {
                limit: self.round_limit,
                node_count: self.graph.node_count(),
            });
        }
        self.rounds += 1;

        let frontier = std::mem::take(&mut self.frontier);
        let mut offers = Vec::new();
        let mut next_frontier = Vec::new();

        for from in &frontier {
            let candidates: Vec<NodeKey> = self
                .graph
                .neighbors_of(from)
                .into_iter()
                .filter(|n| !self.influenced.contains(n) && !self.visited.contains(n))
                .collect();

            let mut round_candidates = Vec::with_capacity(candidates.len());
            for node in candidates {
                // Neighbor lists from a well-formed provider hold no duplicates,
                // but `visited` is the authority either way.
                if self.visited.insert(node.clone()) {
                    round_candidates.push(node);
                }
            }

            for node in round_candidates {
                let edge = self.graph.edge_of(from, &node).ok_or_else(|| {
                    tracing::error!(from = %from, to = %node, "adjacent nodes have no edge");
                    CascadeError::MissingEdge {
                        from: from.to_string(),
                        to: node.to_string(),
                    }
                })?;
                let activated = activates(rng.next_uniform(), self.probability);
                if activated {
                    self.activated_edges.insert(edge.clone());
                    next_frontier.push(node.clone());
                }
                offers.push(Offer {
                    from: from.clone(),
                    node,
                    edge,
                    activated,
                });
            }
        }

        self.influenced.extend(next_frontier.iter().cloned());
        self.frontier = next_frontier;

        let report = RoundReport {
            round: self.rounds,
            offers,
        };
        tracing::debug!(
            round = report.round,
            candidates = report.offers.len(),
            activated = report.activated_count(),
            influenced = self.influenced.len(),
            "cascade round complete"
        );
        Ok(report)
    }

    /// Consume the context into its final node and edge lists.
    pub fn into_parts(self) -> (Vec<NodeKey>, Vec<EdgeKey>, usize) {
        (
            self.influenced.into_vec(),
            self.activated_edges.into_vec(),
            self.rounds,
        )
    }
}
