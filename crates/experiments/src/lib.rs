//! Batch experiments over BreatheEasy agents.
//!
//! Each experiment builds one agent from a persona and generation settings,
//! runs a list of queries through it, and saves the answers together with
//! the agent's run log. A summary JSON and a CSV comparison table cover the
//! whole batch.

pub mod runner;
pub mod suite;
pub mod table;

pub use runner::{
    DEFAULT_QUERIES, ExperimentResult, ExperimentRunner, ExperimentSpec, QueryResult,
};
pub use suite::comprehensive_suite;
pub use table::ComparisonRow;
