//! Final-result mode: only the influenced set and activated edges.

use influence_core::errors::CascadeResult;
use influence_core::events::{EventDispatcher, RoundCompletedEvent, RunCompletedEvent, RunStartedEvent};
use influence_core::models::CascadeOutcome;
use influence_core::traits::{GraphProvider, UniformSource};
use influence_core::types::NodeKey;

use super::round::RunContext;

/// Run a cascade and return the final influenced nodes and activated edges.
///
/// Fails with `InvalidProbability` for a non-finite probability and with
/// `UnknownSeed` if a seed is not in `graph`.
pub fn run_cascade<G: GraphProvider + ?Sized>(
    graph: &G,
    seeds: &[NodeKey],
    probability: f64,
    rng: &mut dyn UniformSource,
) -> CascadeResult<CascadeOutcome> {
    run_cascade_observed(graph, seeds, probability, rng, &EventDispatcher::new())
}

pub(crate) fn run_cascade_observed<G: GraphProvider + ?Sized>(
    graph: &G,
    seeds: &[NodeKey],
    probability: f64,
    rng: &mut dyn UniformSource,
    events: &EventDispatcher,
) -> CascadeResult<CascadeOutcome> {
    let mut ctx = RunContext::new(graph, seeds, probability)?;
    events.emit_run_started(&RunStartedEvent {
        seed_count: ctx.influenced().len(),
        probability,
        record_history: false,
    });

    while ctx.has_frontier() {
        let report = ctx.run_round(rng)?;
        events.emit_round_completed(&RoundCompletedEvent {
            round: report.round,
            candidates: report.offers.len(),
            activated: report.activated_count(),
            total_influenced: ctx.influenced().len(),
        });
    }

    let (influenced_nodes, activated_edges, rounds) = ctx.into_parts();
    tracing::info!(
        rounds,
        influenced = influenced_nodes.len(),
        activated_edges = activated_edges.len(),
        "cascade complete"
    );
    events.emit_run_completed(&RunCompletedEvent {
        rounds,
        influenced: influenced_nodes.len(),
        activated_edges: activated_edges.len(),
    });

    Ok(CascadeOutcome {
        influenced_nodes,
        activated_edges,
        rounds,
    })
}
