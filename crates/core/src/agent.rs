//! Per-agent run configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Immutable configuration fixed when an agent is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Persona display name (e.g., "Friendly Wellness Advisor (Few-Shot)")
    pub persona_name: String,

    /// System prompt sent first on every model call
    pub system_prompt: String,

    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Maximum Act/Observe cycles per run (safety limit)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    1000
}
fn default_top_p() -> f32 {
    1.0
}
fn default_max_iterations() -> u32 {
    5
}

impl RunConfig {
    pub fn new(
        persona_name: impl Into<String>,
        system_prompt: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            persona_name: persona_name.into(),
            system_prompt: system_prompt.into(),
            model: model.into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            max_iterations: default_max_iterations(),
        }
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

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(config_error(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(config_error(format!(
                "top_p must be between 0.0 and 1.0, got {}",
                self.top_p
            )));
        }
        if self.max_tokens == 0 {
            return Err(config_error("max_tokens must be positive".into()));
        }
        if self.max_iterations == 0 {
            return Err(config_error("max_iterations must be positive".into()));
        }
        if self.model.trim().is_empty() {
            return Err(config_error("model must not be empty".into()));
        }
        Ok(())
    }
}

fn config_error(message: String) -> Error {
    Error::Config { message }
}
