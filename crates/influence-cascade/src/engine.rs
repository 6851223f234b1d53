//! CascadeEngine: configuration, random source selection, and event dispatch
//! in front of the cascade functions.

use std::sync::Arc;

use influence_core::config::{HistoryShape, InfluenceConfig};
use influence_core::errors::CascadeResult;
use influence_core::events::{CascadeEventHandler, EventDispatcher};
use influence_core::models::{CascadeHistory, CascadeOutcome, SpreadEstimate};
use influence_core::traits::{GraphProvider, UniformSource};
use influence_core::types::NodeKey;

use crate::cascade::final_result::run_cascade_observed;
use crate::cascade::history::run_cascade_with_history_observed;
use crate::estimate::estimate_spread;
use crate::random::RngSource;

/// Engine settings resolved from `InfluenceConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub default_probability: f64,
    /// Fixed seed for every run. `None` draws fresh entropy per run.
    pub rng_seed: Option<u64>,
    pub history_shape: HistoryShape,
    pub estimate_trials: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from(&InfluenceConfig::default())
    }
}

impl From<&InfluenceConfig> for EngineConfig {
    fn from(config: &InfluenceConfig) -> Self {
        Self {
            default_probability: config.cascade.effective_default_probability(),
            rng_seed: config.cascade.rng_seed,
            history_shape: config.cascade.effective_history_shape(),
            estimate_trials: config.cascade.effective_estimate_trials(),
        }
    }
}

/// The cascade engine. Holds no state between runs besides its settings
/// and registered handlers.
#[derive(Debug, Default)]
pub struct CascadeEngine {
    config: EngineConfig,
    events: EventDispatcher,
}

impl CascadeEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            events: EventDispatcher::new(),
        }
    }

    pub fn from_config(config: &InfluenceConfig) -> Self {
        Self::with_config(EngineConfig::from(config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Probability to use when the caller has not picked one.
    pub fn default_probability(&self) -> f64 {
        self.config.default_probability
    }

    pub fn register_handler(&mut self, handler: Arc<dyn CascadeEventHandler>) {
        self.events.register(handler);
    }

    fn make_source(&self) -> RngSource<rand::rngs::StdRng> {
        match self.config.rng_seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        }
    }

    /// Final-result run with the configured random source.
    pub fn run<G: GraphProvider + ?Sized>(
        &self,
        graph: &G,
        seeds: &[NodeKey],
        probability: f64,
    ) -> CascadeResult<CascadeOutcome> {
        let mut rng = self.make_source();
        self.run_with_source(graph, seeds, probability, &mut rng)
    }

    pub fn run_with_source<G: GraphProvider + ?Sized>(
        &self,
        graph: &G,
        seeds: &[NodeKey],
        probability: f64,
        rng: &mut dyn UniformSource,
    ) -> CascadeResult<CascadeOutcome> {
        run_cascade_observed(graph, seeds, probability, rng, &self.events)
    }

    /// Step-recording run with the configured random source and history shape.
    pub fn run_with_history<G: GraphProvider + ?Sized>(
        &self,
        graph: &G,
        seeds: &[NodeKey],
        probability: f64,
    ) -> CascadeResult<CascadeHistory> {
        let mut rng = self.make_source();
        self.run_with_history_and_source(graph, seeds, probability, &mut rng)
    }

    pub fn run_with_history_and_source<G: GraphProvider + ?Sized>(
        &self,
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
            self.config.history_shape,
            &self.events,
        )
    }

    /// Spread estimate over the configured number of trials. Uses the
    /// configured seed as base seed, or a random one when none is set.
    pub fn estimate<G: GraphProvider + Sync + ?Sized>(
        &self,
        graph: &G,
        seeds: &[NodeKey],
        probability: f64,
    ) -> CascadeResult<SpreadEstimate> {
        let base_seed = self.config.rng_seed.unwrap_or_else(rand::random);
        estimate_spread(
            graph,
            seeds,
            probability,
            self.config.estimate_trials,
            base_seed,
        )
    }
}
