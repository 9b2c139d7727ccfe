//! Agent construction from a persona key plus generation parameters.

use breatheeasy_config::AppConfig;
use breatheeasy_core::agent::RunConfig;
use breatheeasy_core::error::Result;
use breatheeasy_core::provider::Provider;
use breatheeasy_core::tool::ToolRegistry;
use breatheeasy_personas::PersonaRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::policy::DecisionPolicy;
use crate::react::ReactAgent;

/// Everything needed to build a [`ReactAgent`] except its collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub persona: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub max_iterations: u32,
    pub respond_once_observed: bool,
    /// Per-call model timeout in seconds; `None` disables it.
    pub call_timeout_secs: Option<u64>,
}

impl Default for AgentSpec {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AgentSpec {
    /// Defaults taken from the application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            persona: config.default_persona.clone(),
            model: config.default_model.clone(),
            temperature: config.default_temperature,
            max_tokens: config.default_max_tokens,
            top_p: config.default_top_p,
            max_iterations: config.agent.max_iterations,
            respond_once_observed: config.agent.respond_once_observed,
            call_timeout_secs: Some(config.agent.request_timeout_secs),
        }
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Resolve the persona and produce the run configuration.
    ///
    /// Fails with `Error::Persona` for an unknown key and `Error::Config`
    /// for out-of-range parameters.
    pub fn run_config(&self, personas: &PersonaRegistry) -> Result<RunConfig> {
        let persona = personas.lookup(&self.persona)?;
        let config = RunConfig::new(&persona.name, &persona.system_prompt, &self.model)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_top_p(self.top_p)
            .with_max_iterations(self.max_iterations);
        config.validate()?;
        Ok(config)
    }

    pub fn build(
        &self,
        personas: &PersonaRegistry,
        provider: Arc<dyn Provider>,
        tools: Arc<ToolRegistry>,
    ) -> Result<ReactAgent> {
        let config = self.run_config(personas)?;
        let mut agent = ReactAgent::new(provider, tools, config)?.with_policy(DecisionPolicy {
            respond_once_observed: self.respond_once_observed,
        });
        if let Some(secs) = self.call_timeout_secs {
            agent = agent.with_call_timeout(Duration::from_secs(secs));
        }
        Ok(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::SequentialMockProvider;
    use breatheeasy_core::error::{Error, PersonaError};

    fn build(spec: &AgentSpec) -> Result<ReactAgent> {
        spec.build(
            &PersonaRegistry::builtin(),
            Arc::new(SequentialMockProvider::texts(&[])),
            Arc::new(ToolRegistry::new()),
        )
    }

    #[test]
    fn defaults_follow_app_config() {
        let spec = AgentSpec::default();
        assert_eq!(spec.persona, "friendly_few_shot");
        assert_eq!(spec.model, "gpt-4o-mini");
        assert_eq!(spec.max_iterations, 5);
        assert!(spec.respond_once_observed);
        assert_eq!(spec.call_timeout_secs, Some(120));
    }

    #[test]
    fn builds_agent_with_persona_prompt() {
        let spec = AgentSpec::default()
            .with_persona("cautious_zero_shot")
            .with_temperature(0.3)
            .with_max_iterations(1);
        let agent = build(&spec).unwrap();

        let config = agent.config();
        assert_eq!(config.persona_name, "Cautious Service Guide (Zero-Shot)");
        assert!(config.system_prompt.contains("AVAILABLE TOOLS:"));
        assert_eq!(config.max_iterations, 1);
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_persona_fails_construction() {
        let spec = AgentSpec::default().with_persona("grumpy_zero_shot");
        match build(&spec) {
            Err(Error::Persona(PersonaError::Unknown { key, available })) => {
                assert_eq!(key, "grumpy_zero_shot");
                assert_eq!(available.len(), 9);
            }
            other => panic!("expected unknown persona, got {:?}", other.err()),
        }
    }

    #[test]
    fn out_of_range_parameters_fail_construction() {
        let spec = AgentSpec::default().with_top_p(1.2);
        assert!(matches!(build(&spec), Err(Error::Config { .. })));
    }

    #[test]
    fn policy_flag_is_carried() {
        let mut spec = AgentSpec::default();
        spec.respond_once_observed = false;
        let agent = build(&spec).unwrap();
        assert!(!agent.policy().respond_once_observed);
    }
}
