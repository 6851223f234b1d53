// Single source of truth for all default values.

// --- Cascade ---
pub const DEFAULT_PROBABILITY: f64 = 0.3;
pub const DEFAULT_ESTIMATE_TRIALS: usize = 100;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
