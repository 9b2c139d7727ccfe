//! The BreatheEasy reasoning loop.
//!
//! A single-agent ReAct cycle over the business tools:
//!
//! 1. **Think**: ask the model to reason about the user's message
//! 2. **Decide**: heuristically choose between acting and responding
//! 3. **Act**: parse the reasoning into a tool invocation
//! 4. **Observe**: run the tool, record its (truncated) result, loop to 1
//! 5. **Respond**: one final model call produces the answer
//!
//! The loop always terminates: the iteration cap forces Respond.

pub mod builder;
pub mod context;
pub mod parser;
pub mod policy;
pub mod react;
pub mod run_log;
pub mod state;

#[cfg(test)]
mod test_helpers;

pub use builder::AgentSpec;
pub use parser::{default_action, parse_action};
pub use policy::{Decision, DecisionPolicy, DecisionReason, decide};
pub use react::ReactAgent;
pub use run_log::{LogEntry, RunLog, write_entries};
pub use state::{Phase, RunState};
