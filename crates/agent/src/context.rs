//! Bounded prompt assembly for the Think and Respond steps.
//!
//! Prompt size is independent of the iteration count: Think sees only the
//! last two reasoning/observation pairs and Respond only the last
//! observation, each truncated.

use crate::state::RunState;
use breatheeasy_core::message::Message;

pub const THINK_REASONING_LIMIT: usize = 150;
pub const THINK_OBSERVATION_LIMIT: usize = 250;
pub const OBSERVATION_RESULT_LIMIT: usize = 500;
pub const RESPOND_OBSERVATION_LIMIT: usize = 400;

/// Number of recent steps replayed to Think.
pub const RECENT_STEPS: usize = 2;

pub const ELLIPSIS: &str = "...";
pub const TRUNCATED_MARKER: &str = "... (truncated)";

/// Keep the first `limit` chars of `text`, appending `marker` if cut.
pub fn truncate(text: &str, limit: usize, marker: &str) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}{marker}", &text[..byte_index]),
        None => text.to_string(),
    }
}

fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Recent-findings block built from the last two steps.
fn recent_findings(state: &RunState) -> Option<String> {
    if state.reasoning_trace.is_empty() {
        return None;
    }

    let thoughts = last_n(&state.reasoning_trace, RECENT_STEPS);
    let observations = last_n(&state.observations, RECENT_STEPS);

    let mut block = String::from("\n\nRecent findings:\n");
    for (i, (thought, observation)) in thoughts.iter().zip(observations).enumerate() {
        block.push_str(&format!(
            "\nStep {}: {}\nData: {}\n",
            i + 1,
            truncate(thought, THINK_REASONING_LIMIT, ELLIPSIS),
            truncate(observation, THINK_OBSERVATION_LIMIT, ELLIPSIS),
        ));
    }
    Some(block)
}

fn preamble(system_prompt: &str, state: &RunState) -> Vec<Message> {
    let mut messages = vec![Message::system(system_prompt)];
    if let Some(user) = state.user_message() {
        messages.push(user.clone());
    }
    messages
}

/// Messages for a Think step.
pub fn think_messages(system_prompt: &str, state: &RunState) -> Vec<Message> {
    let mut messages = preamble(system_prompt, state);
    if let Some(findings) = recent_findings(state) {
        messages.push(Message::user(findings));
    }
    messages
}

/// Messages for the final Respond step.
pub fn respond_messages(system_prompt: &str, state: &RunState) -> Vec<Message> {
    let mut summary = String::from("Based on the information gathered, provide a complete answer.\n\n");
    if let Some(observation) = state.last_observation() {
        summary.push_str("Key findings:\n");
        summary.push_str(&truncate(observation, RESPOND_OBSERVATION_LIMIT, ELLIPSIS));
    }
    summary.push_str("\n\nProvide a helpful, friendly answer to the user's question.");

    let mut messages = preamble(system_prompt, state);
    messages.push(Message::user(summary));
    messages
}

/// Observation text for a successful tool call.
pub fn format_observation(tool: &str, output: &str) -> String {
    format!(
        "Tool '{tool}' returned: {}",
        truncate(output, OBSERVATION_RESULT_LIMIT, TRUNCATED_MARKER)
    )
}

/// Observation text for a failed tool call.
pub fn format_tool_error(tool: &str, error: &impl std::fmt::Display) -> String {
    format!("Error executing tool '{tool}': {error}")
}
