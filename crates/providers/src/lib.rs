//! Language-model provider for the BreatheEasy agent.
//!
//! The only backend is an OpenAI-compatible chat-completions client; the
//! agent talks to it through `breatheeasy_core::Provider`.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use breatheeasy_core::ProviderError;
use std::sync::Arc;
use std::time::Duration;

/// Build the configured provider.
///
/// Fails with `NotConfigured` when no API key is available.
pub fn build_from_config(
    config: &breatheeasy_config::AppConfig,
) -> Result<Arc<dyn breatheeasy_core::Provider>, ProviderError> {
    let api_key = config
        .api_key
        .clone()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            ProviderError::NotConfigured(
                "no API key; set BREATHEEASY_API_KEY or OPENAI_API_KEY".into(),
            )
        })?;

    let provider = OpenAiCompatProvider::new("openai", &config.api_url, api_key)
        .with_timeout(Duration::from_secs(config.agent.request_timeout_secs))?;
    Ok(Arc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_key_is_not_configured() {
        let config = breatheeasy_config::AppConfig::default();
        let err = build_from_config(&config).err().unwrap();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[test]
    fn build_with_key_uses_configured_url() {
        let config = breatheeasy_config::AppConfig {
            api_key: Some("sk-test".into()),
            api_url: "http://localhost:11434/v1/".into(),
            ..Default::default()
        };
        let provider = build_from_config(&config).unwrap();
        assert_eq!(provider.name(), "openai");
    }
}
