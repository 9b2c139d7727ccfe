//! ReAct loop controller: Think → Decide → Act → Observe → ... → Respond.
//!
//! One `ReactAgent` holds an immutable [`RunConfig`] and an append-only
//! [`RunLog`]. Each `run()` call owns a fresh [`RunState`] for its duration.
//!
//! Failure semantics:
//! - a failing tool becomes an observation and the loop continues
//! - a failing model call aborts the run and no log entry is written
//! - reaching `max_iterations` is a normal path to Respond

use breatheeasy_core::agent::RunConfig;
use breatheeasy_core::error::{Error, ProviderError, Result};
use breatheeasy_core::message::Message;
use breatheeasy_core::provider::{Provider, ProviderRequest};
use breatheeasy_core::tool::ToolRegistry;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::context::{self, truncate};
use crate::parser::{default_action, parse_action};
use crate::policy::{Decision, DecisionPolicy, DecisionReason};
use crate::run_log::{LogEntry, RunLog};
use crate::state::RunState;

const REASONING_PREVIEW: usize = 200;
const OBSERVATION_PREVIEW: usize = 200;

pub struct ReactAgent {
    provider: Arc<dyn Provider>,
    tools: Arc<ToolRegistry>,
    config: RunConfig,
    policy: DecisionPolicy,
    /// Upper bound on a single model call.
    call_timeout: Option<Duration>,
    logs: RunLog,
}

impl ReactAgent {
    /// Create an agent. Fails if `config` is out of range.
    pub fn new(
        provider: Arc<dyn Provider>,
        tools: Arc<ToolRegistry>,
        config: RunConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            provider,
            tools,
            config,
            policy: DecisionPolicy::default(),
            call_timeout: None,
            logs: RunLog::new(),
        })
    }

    pub fn with_policy(mut self, policy: DecisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bound every model call; expiry surfaces as `ProviderError::Timeout`.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    /// Answer `user_message`, returning only the final answer text.
    pub async fn run(&self, user_message: &str) -> Result<String> {
        self.execute(user_message)
            .await
            .map(|entry| entry.final_answer)
    }

    /// All completed runs, oldest first.
    pub async fn logs(&self) -> Vec<LogEntry> {
        self.logs.all().await
    }

    pub fn run_log(&self) -> &RunLog {
        &self.logs
    }

    /// Run the full loop and return the log entry it produced.
    pub async fn execute(&self, user_message: &str) -> Result<LogEntry> {
        let started_at = Utc::now();
        let mut state = RunState::new(user_message);

        info!(
            persona = %self.config.persona_name,
            model = %self.config.model,
            max_iterations = self.config.max_iterations,
            "ReAct run starting"
        );

        loop {
            // ── Think ──
            let messages = context::think_messages(&self.config.system_prompt, &state);
            let thought = self.call_model(messages).await?;
            debug!(
                iteration = state.iteration,
                reasoning = %truncate(&thought, REASONING_PREVIEW, context::ELLIPSIS),
                "Think"
            );
            state.record_thought(thought);

            // ── Decide ──
            let (decision, reason) = self.policy.decide(
                state.iteration,
                self.config.max_iterations,
                state.last_reasoning(),
                !state.observations.is_empty(),
            );
            debug!(iteration = state.iteration, ?decision, %reason, "Decide");

            if decision == Decision::Respond {
                if reason == DecisionReason::IterationCap {
                    info!(
                        iterations = state.iteration,
                        "Max iterations reached, generating final answer"
                    );
                }
                state.choose_respond();
                break;
            }
            state.choose_act();

            // ── Act ──
            let action = match parse_action(state.last_reasoning()) {
                Some(action) => action,
                None => {
                    info!("No action parsed from reasoning, using default search");
                    default_action()
                }
            };
            state.record_action(action);

            // ── Observe ──
            let Some(action) = state.pending_action() else {
                return Err(Error::Internal("no action awaiting observation".into()));
            };
            let tool = action.tool.as_str();
            let observation = match self.tools.execute(action).await {
                Ok(result) => context::format_observation(tool, &result.output),
                Err(e) => context::format_tool_error(tool, &e),
            };
            debug!(
                iteration = state.iteration,
                tool,
                observation = %truncate(&observation, OBSERVATION_PREVIEW, context::ELLIPSIS),
                "Observe"
            );
            state.record_observation(observation);
            debug_assert!(state.is_consistent());
        }

        // ── Respond ──
        let messages = context::respond_messages(&self.config.system_prompt, &state);
        let answer = self.call_model(messages).await?;
        state.finish(answer);
        debug_assert!(state.is_consistent());

        let ended_at = Utc::now();
        let entry = LogEntry::from_run(&self.config, user_message, state, started_at, ended_at)?;
        info!(
            persona = %self.config.persona_name,
            iterations = entry.iterations,
            duration_secs = entry.duration_secs,
            "ReAct run complete"
        );

        self.logs.append(entry.clone()).await;
        Ok(entry)
    }

    /// One model call with the agent's generation parameters.
    async fn call_model(&self, messages: Vec<Message>) -> Result<String> {
        let request = ProviderRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
        };

        let response = match self.call_timeout {
            Some(limit) => tokio::time::timeout(limit, self.provider.complete(request))
                .await
                .map_err(|_| {
                    ProviderError::Timeout(format!(
                        "model call exceeded {}s",
                        limit.as_secs_f64()
                    ))
                })??,
            None => self.provider.complete(request).await?,
        };

        Ok(response.message.content)
    }
}
