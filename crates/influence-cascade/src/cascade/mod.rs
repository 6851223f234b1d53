//! The Independent Cascade model.
//!
//! A run starts from the seeds and proceeds in rounds. In each round every
//! node of the frontier offers influence to its neighbors that are neither
//! influenced nor already offered; each offer succeeds independently with
//! the run's probability. Nodes activated in a round form the next frontier.

pub mod final_result;
pub mod history;
pub mod round;

pub use final_result::run_cascade;
pub use history::run_cascade_with_history;
pub use round::{activates, validate_input, Offer, RoundReport, RunContext};
