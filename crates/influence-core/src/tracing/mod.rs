//! Observability for the influence workspace.
//! `tracing` crate with `EnvFilter`, per-target log levels.

pub mod setup;

pub use setup::{default_filter, init_tracing};
