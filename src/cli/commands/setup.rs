//! Config file bootstrap.

use crate::config::{self, Config};

/// Write a config file with defaults (and optionally an API key)
pub fn cmd_init_config(api_key: Option<&str>, force: bool) -> anyhow::Result<()> {
    if let Some(path) = config::config_path()
        && path.exists()
        && !force
    {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    let mut config = Config::default();
    config.credentials.api_ninjas_key = api_key.map(str::to_string);

    let path = config::save(&config)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
