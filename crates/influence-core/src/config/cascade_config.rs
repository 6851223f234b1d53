//! Cascade configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;

/// Shape of a recorded cascade history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum HistoryShape {
    /// Every round contributes a round-open and a round-close step.
    #[default]
    TwoPerRound,
    /// Like `TwoPerRound`, but the terminal round only contributes its
    /// round-close step.
    CollapseTerminal,
}

impl HistoryShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoPerRound => "two_per_round",
            Self::CollapseTerminal => "collapse_terminal",
        }
    }
}

impl fmt::Display for HistoryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two_per_round" => Ok(Self::TwoPerRound),
            "collapse_terminal" => Ok(Self::CollapseTerminal),
            other => Err(format!("unknown history shape: {other}")),
        }
    }
}

/// Configuration for cascade runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CascadeConfig {
    /// Probability used when the caller does not pick one. Default: 0.3.
    pub default_probability: Option<f64>,
    /// Fixed RNG seed. When unset, every run draws fresh entropy.
    pub rng_seed: Option<u64>,
    /// History shape for step-recording runs. Default: `two_per_round`.
    pub history_shape: Option<HistoryShape>,
    /// Number of trials for spread estimation. Default: 100.
    pub estimate_trials: Option<usize>,
}

impl CascadeConfig {
    /// Returns the effective default probability, defaulting to 0.3.
    pub fn effective_default_probability(&self) -> f64 {
        self.default_probability
            .unwrap_or(defaults::DEFAULT_PROBABILITY)
    }

    /// Returns the effective history shape, defaulting to `TwoPerRound`.
    pub fn effective_history_shape(&self) -> HistoryShape {
        self.history_shape.unwrap_or_default()
    }

    /// Returns the effective trial count, defaulting to 100.
    pub fn effective_estimate_trials(&self) -> usize {
        self.estimate_trials
            .unwrap_or(defaults::DEFAULT_ESTIMATE_TRIALS)
    }
}
