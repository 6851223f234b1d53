/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding per-target log filters.
pub const LOG_ENV_VAR: &str = "INFLUENCE_LOG";

/// Project-level config file name.
pub const CONFIG_FILENAME: &str = "influence.toml";

/// Separator used when an edge key has to be derived from its endpoints.
pub const DERIVED_EDGE_KEY_SEPARATOR: &str = "-";
