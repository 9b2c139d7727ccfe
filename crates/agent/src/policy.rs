//! Decision policy: choose between acting and responding.
//!
//! A heuristic classifier over model-generated text. It only guarantees
//! termination (the iteration cap always wins) and a choice from
//! {Act, Respond}.

use breatheeasy_core::tool::ToolName;
use serde::Serialize;

/// Words suggesting the model wants to use a tool.
pub const ACTION_KEYWORDS: [&str; 11] = [
    "search",
    "check",
    "get",
    "record",
    "look up",
    "find",
    "tool",
    "function",
    "call",
    "need to",
    "should use",
];

/// Phrases suggesting the model is ready to answer.
pub const ANSWER_KEYWORDS: [&str; 7] = [
    "answer:",
    "response:",
    "i can tell",
    "i know that",
    "based on",
    "the answer is",
    "i would say",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Act,
    Respond,
}

/// Which rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionReason {
    IterationCap,
    ToolMentioned(ToolName),
    ActionKeyword(&'static str),
    AnswerKeyword(&'static str),
    HaveObservations,
    NeedInformation,
}

impl std::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionReason::IterationCap => write!(f, "max iterations reached"),
            DecisionReason::ToolMentioned(tool) => write!(f, "tool '{tool}' mentioned"),
            DecisionReason::ActionKeyword(k) => write!(f, "keyword '{k}' found"),
            DecisionReason::AnswerKeyword(k) => write!(f, "answer keyword '{k}' found"),
            DecisionReason::HaveObservations => write!(f, "have observations"),
            DecisionReason::NeedInformation => write!(f, "need more information"),
        }
    }
}

/// Tunable policy behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionPolicy {
    /// With no textual signal, respond once any observation exists.
    /// When false, keep acting until the iteration cap.
    pub respond_once_observed: bool,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            respond_once_observed: true,
        }
    }
}

impl DecisionPolicy {
    pub fn decide(
        &self,
        iteration: u32,
        max_iterations: u32,
        last_reasoning: &str,
        has_observations: bool,
    ) -> (Decision, DecisionReason) {
        if iteration >= max_iterations {
            return (Decision::Respond, DecisionReason::IterationCap);
        }

        let text = last_reasoning.to_lowercase();

        if let Some(tool) = ToolName::ALL.into_iter().find(|t| text.contains(t.as_str())) {
            return (Decision::Act, DecisionReason::ToolMentioned(tool));
        }

        if let Some(keyword) = ACTION_KEYWORDS.into_iter().find(|k| text.contains(k)) {
            return (Decision::Act, DecisionReason::ActionKeyword(keyword));
        }

        if let Some(keyword) = ANSWER_KEYWORDS.into_iter().find(|k| text.contains(k)) {
            return (Decision::Respond, DecisionReason::AnswerKeyword(keyword));
        }

        if has_observations && self.respond_once_observed {
            (Decision::Respond, DecisionReason::HaveObservations)
        } else {
            (Decision::Act, DecisionReason::NeedInformation)
        }
    }
}

/// Decide with the default policy.
pub fn decide(
    iteration: u32,
    max_iterations: u32,
    last_reasoning: &str,
    has_observations: bool,
) -> Decision {
    DecisionPolicy::default()
        .decide(iteration, max_iterations, last_reasoning, has_observations)
        .0
}
