//! Result models handed to the presentation layer.
//! All of them carry keys only, never display attributes.

pub mod graph_summary;
pub mod history;
pub mod outcome;
pub mod spread_estimate;
pub mod step;

pub use graph_summary::GraphSummary;
pub use history::CascadeHistory;
pub use outcome::CascadeOutcome;
pub use spread_estimate::{NodeFrequency, SpreadEstimate};
pub use step::{NodeClass, Step, StepKind};
