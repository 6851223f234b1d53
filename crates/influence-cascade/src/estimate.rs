//! Monte-Carlo spread estimation.
//!
//! Trials are independent final-result runs over the same read-only graph,
//! so they run in parallel. Trial `i` draws from `StdRng` seeded with
//! `base_seed + i`, which keeps the estimate reproducible regardless of
//! thread scheduling.

use rayon::prelude::*;

use influence_core::errors::{CascadeError, CascadeResult};
use influence_core::models::{CascadeOutcome, NodeFrequency, SpreadEstimate};
use influence_core::traits::GraphProvider;
use influence_core::types::{FxHashMap, NodeKey};

use crate::cascade::{run_cascade, validate_input};
use crate::random::RngSource;

/// Estimate the expected spread of `seeds` over `trials` runs.
pub fn estimate_spread<G: GraphProvider + Sync + ?Sized>(
    graph: &G,
    seeds: &[NodeKey],
    probability: f64,
    trials: usize,
    base_seed: u64,
) -> CascadeResult<SpreadEstimate> {
    if trials == 0 {
        return Err(CascadeError::InvalidTrials { trials });
    }
    validate_input(graph, seeds, probability)?;

    let outcomes: Vec<CascadeOutcome> = (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = RngSource::seeded(base_seed.wrapping_add(trial as u64));
            run_cascade(graph, seeds, probability, &mut rng)
        })
        .collect::<CascadeResult<Vec<_>>>()?;

    let estimate = aggregate(&outcomes);
    tracing::info!(
        trials,
        mean_influenced = estimate.mean_influenced,
        max_influenced = estimate.max_influenced,
        "spread estimate complete"
    );
    Ok(estimate)
}

fn aggregate(outcomes: &[CascadeOutcome]) -> SpreadEstimate {
    let trials = outcomes.len();
    let mut counts: FxHashMap<&NodeKey, usize> = FxHashMap::default();
    let mut total_influenced = 0usize;
    let mut total_rounds = 0usize;
    let mut min_influenced = usize::MAX;
    let mut max_influenced = 0usize;

    for outcome in outcomes {
        let size = outcome.influenced_nodes.len();
        total_influenced += size;
        total_rounds += outcome.rounds;
        min_influenced = min_influenced.min(size);
        max_influenced = max_influenced.max(size);
        for node in &outcome.influenced_nodes {
            *counts.entry(node).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&NodeKey, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    SpreadEstimate {
        trials,
        mean_influenced: total_influenced as f64 / trials as f64,
        min_influenced,
        max_influenced,
        mean_rounds: total_rounds as f64 / trials as f64,
        activation_frequency: ranked
            .into_iter()
            .map(|(node, count)| NodeFrequency {
                node: node.clone(),
                frequency: count as f64 / trials as f64,
            })
            .collect(),
    }
}
