//! # influence-core
//!
//! Foundation crate for the influence cascade workspace.
//! Defines keys, traits, result models, errors, config, events, and tracing setup.
//! The cascade engine and the fixtures crate depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::InfluenceConfig;
pub use errors::{CascadeError, CascadeResult};
pub use models::{CascadeHistory, CascadeOutcome, SpreadEstimate, Step, StepKind};
pub use traits::{GraphProvider, UniformSource};
pub use types::{EdgeKey, NodeKey};
