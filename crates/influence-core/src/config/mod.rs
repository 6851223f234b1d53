//! Configuration system for the influence workspace.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod cascade_config;
pub mod defaults;
pub mod influence_config;
pub mod observability_config;

pub use cascade_config::{CascadeConfig, HistoryShape};
pub use influence_config::{ConfigOverrides, InfluenceConfig};
pub use observability_config::ObservabilityConfig;
