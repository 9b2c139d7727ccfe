pub mod chat;
pub mod experiment;
pub mod onboard;
pub mod personas;
pub mod serve;

use anyhow::Context;
use breatheeasy_config::AppConfig;
use breatheeasy_core::provider::Provider;
use breatheeasy_core::tool::ToolRegistry;
use breatheeasy_personas::PersonaRegistry;
use breatheeasy_tools::CustomerRecords;
use std::sync::Arc;

/// Collaborators shared by every agent a command builds.
pub struct Runtime {
    pub provider: Arc<dyn Provider>,
    pub tools: Arc<ToolRegistry>,
    pub personas: PersonaRegistry,
}

pub fn load_config() -> anyhow::Result<AppConfig> {
    AppConfig::load().context("Failed to load config")
}

/// Build the provider, the file-backed tools, and the persona store.
pub fn runtime(config: &AppConfig) -> anyhow::Result<Runtime> {
    if !config.has_api_key() {
        print_missing_key_help();
        anyhow::bail!("No API key found. See above for setup instructions.");
    }

    let provider = breatheeasy_providers::build_from_config(config)
        .context("Failed to build model provider")?;

    let records = CustomerRecords::open(config.storage.leads_path(), config.storage.feedback_path())
        .context("Failed to open customer records")?;
    let tools = Arc::new(breatheeasy_tools::default_registry(Arc::new(records)));
    let personas = PersonaRegistry::with_tools(&tools.definitions());

    Ok(Runtime {
        provider,
        tools,
        personas,
    })
}

fn print_missing_key_help() {
    eprintln!();
    eprintln!("  ERROR: No API key configured!");
    eprintln!();
    eprintln!("  Set one of these environment variables:");
    eprintln!("    BREATHEEASY_API_KEY=sk-...");
    eprintln!("    OPENAI_API_KEY=sk-...");
    eprintln!();
    eprintln!("  Or add `api_key` to your config file:");
    eprintln!("    {}", AppConfig::config_path().display());
    eprintln!();
}
