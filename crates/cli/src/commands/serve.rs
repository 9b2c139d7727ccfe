//! `breatheeasy serve`: start the browser chat UI.

use super::load_config;

pub async fn run(port_override: Option<u16>) -> anyhow::Result<()> {
    let mut config = load_config()?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("BreatheEasy chat UI");
    println!("   Listening: http://{}:{}", config.gateway.host, config.gateway.port);

    breatheeasy_gateway::start(config)
        .await
        .map_err(|e| anyhow::anyhow!("Gateway failed: {e}"))
}
