use anyhow::Result;

use byteforge_core::AppConfig;

/// Print where the configuration file lives
pub fn path() -> Result<()> {
    let path = AppConfig::config_path();
    let state = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display(), state);
    Ok(())
}

/// Write the current configuration (defaults when no file exists)
pub fn init(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    config.save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
