//! Error handling for the influence workspace.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cascade_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;

pub use cascade_error::{CascadeError, CascadeResult};
pub use config_error::ConfigError;
pub use error_code::InfluenceErrorCode;
pub use graph_error::GraphError;
