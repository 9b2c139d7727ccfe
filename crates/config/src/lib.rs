//! Configuration loading and validation for the BreatheEasy agent.
//!
//! Loads configuration from `~/.breatheeasy/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.breatheeasy/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the language-model service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Persona key used when none is given
    #[serde(default = "default_persona")]
    pub default_persona: String,

    #[serde(default = "default_model")]
    pub default_model: String,

    #[serde(default = "default_temperature")]
    pub default_temperature: f32,

    /// Default max tokens per model response
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,

    /// Default nucleus-sampling probability
    #[serde(default = "default_top_p")]
    pub default_top_p: f32,

    #[serde(default)]
    pub agent: AgentSettings,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub experiments: ExperimentsConfig,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1".into()
}
fn default_persona() -> String {
    "friendly_few_shot".into()
}
fn default_model() -> String {
    "gpt-4o-mini".into()
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
fn default_true() -> bool {
    true
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("default_persona", &self.default_persona)
            .field("default_model", &self.default_model)
            .field("default_temperature", &self.default_temperature)
            .field("default_max_tokens", &self.default_max_tokens)
            .field("default_top_p", &self.default_top_p)
            .field("agent", &self.agent)
            .field("gateway", &self.gateway)
            .field("storage", &self.storage)
            .field("experiments", &self.experiments)
            .finish()
    }
}

/// Reasoning-loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Maximum Act/Observe cycles per run
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Per-call timeout for the model service, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// When the reasoning gives no signal, answer as soon as one
    /// observation exists. `false` keeps acting until the iteration cap.
    #[serde(default = "default_true")]
    pub respond_once_observed: bool,
}

fn default_max_iterations() -> u32 {
    5
}
fn default_request_timeout() -> u64 {
    120
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            request_timeout_secs: default_request_timeout(),
            respond_once_observed: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    7860
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// Where customer leads and feedback are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for record files (default: `~/.breatheeasy/data`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_leads_file")]
    pub leads_file: String,

    #[serde(default = "default_feedback_file")]
    pub feedback_file: String,
}

fn default_leads_file() -> String {
    "customer_leads.json".into()
}
fn default_feedback_file() -> String {
    "customer_feedback.json".into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            leads_file: default_leads_file(),
            feedback_file: default_feedback_file(),
        }
    }
}

impl StorageConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| AppConfig::config_dir().join("data"))
    }

    pub fn leads_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.leads_file)
    }

    pub fn feedback_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.feedback_file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentsConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("experiment_results")
}

impl Default for ExperimentsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.breatheeasy/config.toml).
    ///
    /// Environment overrides:
    /// - `BREATHEEASY_API_KEY`, then `OPENAI_API_KEY` (only if no key in file)
    /// - `BREATHEEASY_API_URL`
    /// - `BREATHEEASY_PERSONA`
    /// - `BREATHEEASY_MODEL`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup.
    pub fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if self.api_key.is_none() {
            self.api_key = var("BREATHEEASY_API_KEY").or_else(|| var("OPENAI_API_KEY"));
        }
        if let Some(url) = var("BREATHEEASY_API_URL") {
            self.api_url = url;
        }
        if let Some(persona) = var("BREATHEEASY_PERSONA") {
            self.default_persona = persona;
        }
        if let Some(model) = var("BREATHEEASY_MODEL") {
            self.default_model = model;
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".breatheeasy")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.default_temperature) {
            return Err(ConfigError::ValidationError(
                "default_temperature must be between 0.0 and 1.0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.default_top_p) {
            return Err(ConfigError::ValidationError(
                "default_top_p must be between 0.0 and 1.0".into(),
            ));
        }
        if self.default_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "default_max_tokens must be > 0".into(),
            ));
        }
        if self.agent.max_iterations == 0 {
            return Err(ConfigError::ValidationError(
                "agent.max_iterations must be > 0".into(),
            ));
        }
        if self.agent.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "agent.request_timeout_secs must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            default_persona: default_persona(),
            default_model: default_model(),
            default_temperature: default_temperature(),
            default_max_tokens: default_max_tokens(),
            default_top_p: default_top_p(),
            agent: AgentSettings::default(),
            gateway: GatewayConfig::default(),
            storage: StorageConfig::default(),
            experiments: ExperimentsConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
