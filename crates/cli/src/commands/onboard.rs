//! `breatheeasy onboard`: first-time setup.

use anyhow::Context;
use breatheeasy_config::AppConfig;

pub fn run() -> anyhow::Result<()> {
    let config_dir = AppConfig::config_dir();
    let config_path = AppConfig::config_path();
    let data_dir = AppConfig::default().storage.resolved_data_dir();

    println!("BreatheEasy: first-time setup");
    println!("=============================\n");

    for dir in [&config_dir, &data_dir] {
        if dir.exists() {
            println!("  Directory exists: {}", dir.display());
        } else {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            println!("  Created: {}", dir.display());
        }
    }

    if config_path.exists() {
        println!("\n  Config already exists at: {}", config_path.display());
        println!("  Edit it manually or delete it and re-run onboard.\n");
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("\n  Created config.toml at: {}", config_path.display());
        println!("\n  Next steps:");
        println!("   1. Add your API key to {} or set OPENAI_API_KEY", config_path.display());
        println!("   2. Run: breatheeasy chat");
        println!("   3. Or open the web UI with: breatheeasy serve\n");
    }

    Ok(())
}
