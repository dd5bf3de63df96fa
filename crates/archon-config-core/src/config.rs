use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env::{
    process_env, EnvironmentConfig, ARCHON_MCP_PORT, DEFAULT_HOST, DEFAULT_TRANSPORT, HOST,
    OPENAI_API_KEY, PORT, SUPABASE_SERVICE_KEY, SUPABASE_URL, TRANSPORT,
};
use crate::error::ConfigurationError;
use crate::rag::{
    RagStrategyConfig, USE_AGENTIC_RAG, USE_CONTEXTUAL_EMBEDDINGS, USE_HYBRID_SEARCH,
    USE_RERANKING,
};

/// Default MCP port written into a fresh config file.
const TEMPLATE_PORT: u16 = 8051;

/// Fallback values loaded from `~/.config/archon/config.toml`.
///
/// Every field mirrors an environment variable (lower-cased). The process
/// environment always wins; the file only fills gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchonConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_service_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    /// Optional `[rag]` table; missing keys inside it take the recommended defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag: Option<RagStrategyConfig>,
}

impl ArchonConfig {
    /// Non-secret starting point for `init`.
    pub fn template() -> Self {
        Self {
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(TEMPLATE_PORT),
            transport: Some(DEFAULT_TRANSPORT.to_string()),
            rag: Some(RagStrategyConfig::default()),
            ..Self::default()
        }
    }

    /// Value of the variable `name` as stored in the file.
    pub fn get(&self, name: &str) -> Option<String> {
        let rag = self.rag.as_ref();
        match name {
            SUPABASE_URL => self.supabase_url.clone(),
            SUPABASE_SERVICE_KEY => self.supabase_service_key.clone(),
            OPENAI_API_KEY => self.openai_api_key.clone(),
            HOST => self.host.clone(),
            PORT => self.port.map(|p| p.to_string()),
            TRANSPORT => self.transport.clone(),
            USE_CONTEXTUAL_EMBEDDINGS => rag.map(|r| r.use_contextual_embeddings.to_string()),
            USE_HYBRID_SEARCH => rag.map(|r| r.use_hybrid_search.to_string()),
            USE_AGENTIC_RAG => rag.map(|r| r.use_agentic_rag.to_string()),
            USE_RERANKING => rag.map(|r| r.use_reranking.to_string()),
            _ => None,
        }
    }

    /// Process environment first (empty counts as unset), then the file.
    pub fn lookup(&self, name: &str) -> Option<String> {
        self.lookup_with(&process_env, name)
    }

    /// Like [`lookup`](Self::lookup) with `env` standing in for the process environment.
    ///
    /// `PORT` resolves `PORT`, then `ARCHON_MCP_PORT` from `env` before the
    /// file's `port`, so either environment name beats the file.
    pub fn lookup_with<E>(&self, env: &E, name: &str) -> Option<String>
    where
        E: Fn(&str) -> Option<String>,
    {
        let from_env = |n: &str| env(n).filter(|v| !v.is_empty());
        match name {
            PORT => from_env(PORT)
                .or_else(|| from_env(ARCHON_MCP_PORT))
                .or_else(|| self.get(PORT)),
            _ => from_env(name).or_else(|| self.get(name)),
        }
    }

    pub fn environment_config(&self) -> Result<EnvironmentConfig, ConfigurationError> {
        self.environment_config_with(process_env)
    }

    pub fn environment_config_with<E>(
        &self,
        env: E,
    ) -> Result<EnvironmentConfig, ConfigurationError>
    where
        E: Fn(&str) -> Option<String>,
    {
        EnvironmentConfig::from_lookup(|name| self.lookup_with(&env, name))
    }

    pub fn rag_strategy(&self) -> RagStrategyConfig {
        self.rag_strategy_with(process_env)
    }

    pub fn rag_strategy_with<E>(&self, env: E) -> RagStrategyConfig
    where
        E: Fn(&str) -> Option<String>,
    {
        RagStrategyConfig::from_lookup(|name| self.lookup_with(&env, name))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("archon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load the config file, or defaults if it does not exist.
pub fn load() -> Result<ArchonConfig> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<ArchonConfig> {
    if !path.exists() {
        tracing::debug!("no config file at {}, using environment only", path.display());
        return Ok(ArchonConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let cfg: ArchonConfig = toml::from_str(&data)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    tracing::debug!("loaded config file {}", path.display());
    Ok(cfg)
}

/// Write the template config if none exists. Returns the path and whether it was created.
pub fn init() -> Result<(PathBuf, bool)> {
    let path = config_path()?;
    let created = init_at(&path)?;
    Ok((path, created))
}

pub fn init_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let toml = toml::to_string_pretty(&ArchonConfig::template())?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    tracing::info!("created default config at {}", path.display());
    Ok(true)
}

/// Load a `.env` file into the process environment. Existing variables are kept.
pub fn load_dotenv(path: &Path) -> Result<()> {
    dotenvy::from_path(path).with_context(|| format!("loading env file {}", path.display()))?;
    tracing::debug!("loaded env file {}", path.display());
    Ok(())
}
