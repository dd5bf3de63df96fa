//! `archon-config rag` – print resolved RAG strategy flags.

use archon_config::config::ArchonConfig;

pub fn run_rag(file: &ArchonConfig) {
    let rag = file.rag_strategy();
    println!("use_contextual_embeddings = {}", rag.use_contextual_embeddings);
    println!("use_hybrid_search         = {}", rag.use_hybrid_search);
    println!("use_agentic_rag           = {}", rag.use_agentic_rag);
    println!("use_reranking             = {}", rag.use_reranking);
}
