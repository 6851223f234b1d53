//! Cascade run errors.

use super::error_code::{self, InfluenceErrorCode};

/// Errors surfaced by a cascade run.
///
/// `InvalidProbability`, `UnknownSeed` and `InvalidTrials` are caller input
/// problems. `MissingEdge` and `RoundLimitExceeded` mean the graph provider
/// broke its contract; they are never retried.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    #[error("invalid probability: {value} is not a finite number")]
    InvalidProbability { value: f64 },

    #[error("unknown seed node: {node}")]
    UnknownSeed { node: String },

    #[error("no edge between adjacent nodes {from} and {to}")]
    MissingEdge { from: String, to: String },

    #[error("round limit exceeded: {limit} rounds for {node_count} nodes")]
    RoundLimitExceeded { limit: usize, node_count: usize },

    #[error("invalid trial count: {trials}")]
    InvalidTrials { trials: usize },
}

impl CascadeError {
    /// Returns true for errors caused by caller-supplied values.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidProbability { .. } | Self::UnknownSeed { .. } | Self::InvalidTrials { .. }
        )
    }
}

impl InfluenceErrorCode for CascadeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidProbability { .. } | Self::UnknownSeed { .. } | Self::InvalidTrials { .. } => {
                error_code::INVALID_INPUT
            }
            Self::MissingEdge { .. } => error_code::MISSING_EDGE,
            Self::RoundLimitExceeded { .. } => error_code::ROUND_LIMIT,
        }
    }
}

/// Result alias for cascade operations.
pub type CascadeResult<T> = Result<T, CascadeError>;
