//! `archon-config check` – load and validate the full server configuration.

use anyhow::{Context, Result};
use archon_config::config::ArchonConfig;
use archon_config::endpoint::strip_credentials;

pub fn run_check(file: &ArchonConfig) -> Result<()> {
    let cfg = file
        .environment_config()
        .context("startup configuration is invalid")?;
    tracing::info!("configuration ok: {:?}", cfg);

    println!("Configuration OK");
    println!("  supabase_url:   {}", strip_credentials(&cfg.supabase_url));
    println!("  service key:    set");
    println!(
        "  openai key:     {}",
        if cfg.openai_api_key.is_some() { "set" } else { "not set" }
    );
    println!("  listen:         {}:{}", cfg.host, cfg.port);
    println!("  transport:      {}", cfg.transport);
    Ok(())
}
