//! Property tests over random undirected graphs.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use influence_cascade::{run_cascade, run_cascade_with_history, IndexedGraph, RngSource};
use influence_core::traits::GraphProvider;
use influence_core::types::NodeKey;

fn node(i: usize) -> NodeKey {
    NodeKey::new(format!("n{i}"))
}

/// Build a graph with `n` nodes; self-loops and repeated pairs are skipped.
fn build_random_graph(n: usize, edges: &[(usize, usize)]) -> IndexedGraph {
    let mut graph = IndexedGraph::new();
    for i in 0..n {
        graph.ensure_node(node(i));
    }
    for &(a, b) in edges {
        if a < n && b < n && a != b {
            let _ = graph.connect(node(a), node(b));
        }
    }
    graph
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
}

fn seed_strategy(n: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..n, 1..4)
}

/// Nodes reachable from `seeds`, seeds included.
fn reachable(graph: &IndexedGraph, seeds: &[NodeKey]) -> HashSet<NodeKey> {
    let mut seen: HashSet<NodeKey> = seeds.iter().cloned().collect();
    let mut queue: VecDeque<NodeKey> = seeds.iter().cloned().collect();
    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors_of(&current) {
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    seen
}

// =============================================================================
// Seeds, reachability, bounded rounds
// =============================================================================
proptest! {
    #[test]
    fn influenced_set_contains_seeds_and_stays_reachable(
        edges in edge_strategy(12),
        seed_ids in seed_strategy(12),
        probability in 0.0_f64..=1.0,
        rng_seed in any::<u64>(),
    ) {
        let graph = build_random_graph(12, &edges);
        let seeds: Vec<NodeKey> = seed_ids.iter().map(|&i| node(i)).collect();
        let mut rng = RngSource::seeded(rng_seed);
        let outcome = run_cascade(&graph, &seeds, probability, &mut rng).unwrap();

        let influenced: HashSet<NodeKey> = outcome.influenced_nodes.iter().cloned().collect();
        prop_assert_eq!(influenced.len(), outcome.influenced_nodes.len(), "no duplicates");
        for seed in &seeds {
            prop_assert!(influenced.contains(seed));
        }
        prop_assert!(influenced.is_subset(&reachable(&graph, &seeds)));
        prop_assert!(outcome.rounds >= 1);
        prop_assert!(outcome.rounds <= graph.node_count());

        let distinct_seeds: HashSet<&NodeKey> = seeds.iter().collect();
        prop_assert_eq!(
            outcome.activated_edges.len(),
            outcome.influenced_nodes.len() - distinct_seeds.len()
        );
    }
}

// =============================================================================
// Probability boundaries
// =============================================================================
proptest! {
    #[test]
    fn certain_probability_reaches_whole_component(
        edges in edge_strategy(15),
        seed_ids in seed_strategy(15),
        rng_seed in any::<u64>(),
    ) {
        let graph = build_random_graph(15, &edges);
        let seeds: Vec<NodeKey> = seed_ids.iter().map(|&i| node(i)).collect();
        let mut rng = RngSource::seeded(rng_seed);
        let outcome = run_cascade(&graph, &seeds, 1.0, &mut rng).unwrap();

        let influenced: HashSet<NodeKey> = outcome.influenced_nodes.into_iter().collect();
        prop_assert_eq!(influenced, reachable(&graph, &seeds));
    }

    #[test]
    fn zero_probability_keeps_only_seeds(
        edges in edge_strategy(15),
        seed_ids in seed_strategy(15),
        rng_seed in any::<u64>(),
    ) {
        let graph = build_random_graph(15, &edges);
        let seeds: Vec<NodeKey> = seed_ids.iter().map(|&i| node(i)).collect();
        let mut rng = RngSource::seeded(rng_seed);
        let outcome = run_cascade(&graph, &seeds, 0.0, &mut rng).unwrap();

        let influenced: HashSet<NodeKey> = outcome.influenced_nodes.iter().cloned().collect();
        let expected: HashSet<NodeKey> = seeds.iter().cloned().collect();
        prop_assert_eq!(influenced, expected);
        prop_assert!(outcome.activated_edges.is_empty());
        prop_assert_eq!(outcome.rounds, 1);
    }
}

// =============================================================================
// Reproducibility and mode agreement
// =============================================================================
proptest! {
    #[test]
    fn fixed_seed_is_deterministic(
        edges in edge_strategy(12),
        seed_ids in seed_strategy(12),
        probability in 0.0_f64..=1.0,
        rng_seed in any::<u64>(),
    ) {
        let graph = build_random_graph(12, &edges);
        let seeds: Vec<NodeKey> = seed_ids.iter().map(|&i| node(i)).collect();
        let first = run_cascade(&graph, &seeds, probability, &mut RngSource::seeded(rng_seed)).unwrap();
        let second = run_cascade(&graph, &seeds, probability, &mut RngSource::seeded(rng_seed)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn history_terminal_matches_final_result(
        edges in edge_strategy(12),
        seed_ids in seed_strategy(12),
        probability in 0.0_f64..=1.0,
        rng_seed in any::<u64>(),
    ) {
        let graph = build_random_graph(12, &edges);
        let seeds: Vec<NodeKey> = seed_ids.iter().map(|&i| node(i)).collect();
        let outcome = run_cascade(&graph, &seeds, probability, &mut RngSource::seeded(rng_seed)).unwrap();
        let history =
            run_cascade_with_history(&graph, &seeds, probability, &mut RngSource::seeded(rng_seed)).unwrap();

        prop_assert_eq!(history.len(), 1 + 2 * outcome.rounds);
        prop_assert_eq!(history.to_outcome(), outcome);

        let mut previous = 0;
        for step in history.steps() {
            prop_assert!(step.influenced_nodes.len() >= previous);
            previous = step.influenced_nodes.len();
        }
    }
}
