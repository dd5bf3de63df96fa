//! `archon-config init` – write the default config file.

use anyhow::Result;
use archon_config::config;

pub fn run_init() -> Result<()> {
    let (path, created) = config::init()?;
    if created {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}
