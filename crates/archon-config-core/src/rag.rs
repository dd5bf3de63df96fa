//! RAG strategy toggles.

use serde::{Deserialize, Serialize};

pub const USE_CONTEXTUAL_EMBEDDINGS: &str = "USE_CONTEXTUAL_EMBEDDINGS";
pub const USE_HYBRID_SEARCH: &str = "USE_HYBRID_SEARCH";
pub const USE_AGENTIC_RAG: &str = "USE_AGENTIC_RAG";
pub const USE_RERANKING: &str = "USE_RERANKING";

/// Which retrieval strategies the server enables.
///
/// `Default` is the recommended set written into a fresh config file. When
/// loading from the environment an unset flag is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagStrategyConfig {
    pub use_contextual_embeddings: bool,
    pub use_hybrid_search: bool,
    pub use_agentic_rag: bool,
    pub use_reranking: bool,
}

impl Default for RagStrategyConfig {
    fn default() -> Self {
        Self {
            use_contextual_embeddings: false,
            use_hybrid_search: true,
            use_agentic_rag: true,
            use_reranking: true,
        }
    }
}

impl RagStrategyConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |name: &str| parse_flag(lookup(name).as_deref());
        Self {
            use_contextual_embeddings: flag(USE_CONTEXTUAL_EMBEDDINGS),
            use_hybrid_search: flag(USE_HYBRID_SEARCH),
            use_agentic_rag: flag(USE_AGENTIC_RAG),
            use_reranking: flag(USE_RERANKING),
        }
    }
}

/// `true`, `1`, `yes`, `on` (any case) are true; everything else is false.
pub fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on"),
        None => false,
    }
}
