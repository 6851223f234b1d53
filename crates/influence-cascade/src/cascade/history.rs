//! Step-recording mode.
//!
//! Rounds run exactly as in final-result mode; each round report is folded
//! into a round-open and a round-close step.

use influence_core::config::HistoryShape;
use influence_core::errors::CascadeResult;
use influence_core::events::{EventDispatcher, RoundCompletedEvent, RunCompletedEvent, RunStartedEvent};
use influence_core::models::{CascadeHistory, Step, StepKind};
use influence_core::traits::{GraphProvider, UniformSource};
use influence_core::types::NodeKey;

use super::round::{RoundReport, RunContext};

/// Run a cascade and record every round as a pair of steps.
pub fn run_cascade_with_history<G: GraphProvider + ?Sized>(
    graph: &G,
    seeds: &[NodeKey],
    probability: f64,
    rng: &mut dyn UniformSource,
) -> CascadeResult<CascadeHistory> {
    run_cascade_with_history_observed(
        graph,
        seeds,
        probability,
        rng,
        HistoryShape::TwoPerRound,
        &EventDispatcher::new(),
    )
}

pub(crate) fn run_cascade_with_history_observed<G: GraphProvider + ?Sized>(
    graph: &G,
    seeds: &[NodeKey],
    probability: f64,
    rng: &mut dyn UniformSource,
    shape: HistoryShape,
    events: &EventDispatcher,
) -> CascadeResult<CascadeHistory> {
    let mut ctx = RunContext::new(graph, seeds, probability)?;
    events.emit_run_started(&RunStartedEvent {
        seed_count: ctx.influenced().len(),
        probability,
        record_history: true,
    });

    let mut resolved = Step::initial(ctx.influenced().as_slice().to_vec());
    let mut steps = vec![resolved.clone()];

    while ctx.has_frontier() {
        let report = ctx.run_round(rng)?;
        events.emit_round_completed(&RoundCompletedEvent {
            round: report.round,
            candidates: report.offers.len(),
            activated: report.activated_count(),
            total_influenced: ctx.influenced().len(),
        });

        let open = open_step(&resolved, &report);
        resolved = close_step(&open, &report);
        let collapse = shape == HistoryShape::CollapseTerminal && report.is_terminal();
        if !collapse {
            steps.push(open);
        }
        steps.push(resolved.clone());
    }

    let history = CascadeHistory { shape, steps };
    let terminal = history.to_outcome();
    tracing::info!(
        rounds = terminal.rounds,
        steps = history.len(),
        influenced = terminal.influenced_nodes.len(),
        "cascade history recorded"
    );
    events.emit_run_completed(&RunCompletedEvent {
        rounds: terminal.rounds,
        influenced: terminal.influenced_nodes.len(),
        activated_edges: terminal.activated_edges.len(),
    });

    Ok(history)
}

/// Offer this round's candidates: resolved classes carry over unchanged.
pub fn open_step(previous: &Step, report: &RoundReport) -> Step {
    let mut influencing_nodes = previous.influencing_nodes.clone();
    influencing_nodes.extend(report.candidate_nodes().cloned());
    let mut influencing_edges = previous.influencing_edges.clone();
    influencing_edges.extend(report.candidate_edges().cloned());

    Step {
        kind: StepKind::RoundOpen,
        round: report.round,
        influenced_nodes: previous.influenced_nodes.clone(),
        influenced_edges: previous.influenced_edges.clone(),
        influencing_nodes,
        influencing_edges,
        not_influenced_nodes: previous.not_influenced_nodes.clone(),
        not_influenced_edges: previous.not_influenced_edges.clone(),
    }
}

/// Resolve the offered candidates and clear the influencing class.
pub fn close_step(open: &Step, report: &RoundReport) -> Step {
    let mut influenced_nodes = open.influenced_nodes.clone();
    let mut influenced_edges = open.influenced_edges.clone();
    for offer in report.activated() {
        influenced_nodes.push(offer.node.clone());
        influenced_edges.push(offer.edge.clone());
    }

    let mut not_influenced_nodes = open.not_influenced_nodes.clone();
    let mut not_influenced_edges = open.not_influenced_edges.clone();
    for offer in report.rejected() {
        not_influenced_nodes.push(offer.node.clone());
        not_influenced_edges.push(offer.edge.clone());
    }

    Step {
        kind: StepKind::RoundClose,
        round: report.round,
        influenced_nodes,
        influenced_edges,
        influencing_nodes: Vec::new(),
        influencing_edges: Vec::new(),
        not_influenced_nodes,
        not_influenced_edges,
    }
}
