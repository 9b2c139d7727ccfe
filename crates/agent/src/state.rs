//! Mutable state of a single `run()` call.
//!
//! Owned exclusively by the loop controller for the duration of the run and
//! consumed into a log entry when the run finishes.

use breatheeasy_core::message::{Conversation, Message};
use breatheeasy_core::tool::ToolInvocation;

/// Control states of the reasoning loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Think,
    Decide,
    Act,
    Observe,
    Respond,
    Done,
}

impl Phase {
    /// Whether `self → next` is a legal transition.
    pub fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Think, Phase::Decide)
                | (Phase::Decide, Phase::Act)
                | (Phase::Decide, Phase::Respond)
                | (Phase::Act, Phase::Observe)
                | (Phase::Observe, Phase::Think)
                | (Phase::Respond, Phase::Done)
        )
    }
}

#[derive(Debug)]
pub struct RunState {
    pub conversation: Conversation,
    pub reasoning_trace: Vec<String>,
    pub actions: Vec<ToolInvocation>,
    pub observations: Vec<String>,
    pub iteration: u32,
    final_answer: Option<String>,
    phase: Phase,
}

impl RunState {
    pub fn new(user_message: &str) -> Self {
        Self {
            conversation: Conversation::starting_with(user_message),
            reasoning_trace: Vec::new(),
            actions: Vec::new(),
            observations: Vec::new(),
            iteration: 0,
            final_answer: None,
            phase: Phase::Think,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn transition(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal transition {:?} -> {next:?}",
            self.phase
        );
        self.phase = next;
    }

    /// The message the run was started with.
    pub fn user_message(&self) -> Option<&Message> {
        self.conversation.first_user_message()
    }

    pub fn last_reasoning(&self) -> &str {
        self.reasoning_trace.last().map(String::as_str).unwrap_or("")
    }

    pub fn last_observation(&self) -> Option<&str> {
        self.observations.last().map(String::as_str)
    }

    /// Think: store the model's reasoning.
    pub fn record_thought(&mut self, thought: String) {
        self.conversation.push(Message::assistant(thought.clone()));
        self.reasoning_trace.push(thought);
        self.transition(Phase::Decide);
    }

    /// Decide chose to act.
    pub fn choose_act(&mut self) {
        self.transition(Phase::Act);
    }

    /// Decide chose to respond.
    pub fn choose_respond(&mut self) {
        self.transition(Phase::Respond);
    }

    /// Act: store the chosen invocation.
    pub fn record_action(&mut self, action: ToolInvocation) {
        self.actions.push(action);
        self.transition(Phase::Observe);
    }

    /// The invocation awaiting observation.
    pub fn pending_action(&self) -> Option<&ToolInvocation> {
        (self.phase == Phase::Observe)
            .then(|| self.actions.last())
            .flatten()
    }

    /// Observe: store the observation and complete one iteration.
    pub fn record_observation(&mut self, observation: String) {
        self.observations.push(observation);
        self.iteration += 1;
        self.transition(Phase::Think);
    }

    /// Respond: set the final answer, exactly once.
    pub fn finish(&mut self, answer: String) {
        self.conversation.push(Message::assistant(answer.clone()));
        self.final_answer = Some(answer);
        self.transition(Phase::Done);
    }

    pub fn final_answer(&self) -> Option<&str> {
        self.final_answer.as_deref()
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// `observations`, `actions`, and `iteration` agree outside an Act/Observe pair.
    pub fn is_consistent(&self) -> bool {
        let aligned = self.observations.len() == self.actions.len()
            && self.actions.len() == self.iteration as usize;
        let mid_cycle = self.phase == Phase::Observe
            && self.actions.len() == self.observations.len() + 1;
        (aligned || mid_cycle) && (self.final_answer.is_some() == self.is_done())
    }
}
