//! InfluenceErrorCode trait for the presentation boundary.

/// Trait for converting errors to stable, machine-readable codes.
/// Every error enum implements this so a browser front end can branch on
/// the code rather than on the message text.
pub trait InfluenceErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the presentation boundary.
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const MISSING_EDGE: &str = "MISSING_EDGE";
pub const ROUND_LIMIT: &str = "ROUND_LIMIT";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
