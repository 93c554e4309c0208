use anyhow::Result;

use vitrina_core::AppConfig;

/// Write the default configuration, refusing to clobber an existing file
pub fn run() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Configuration already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default().save()?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
