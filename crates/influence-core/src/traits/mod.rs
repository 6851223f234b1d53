//! Seams between the cascade engine and its collaborators.

pub mod graph_provider;
pub mod uniform_source;

pub use graph_provider::GraphProvider;
pub use uniform_source::UniformSource;
