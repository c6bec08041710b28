//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for the vector database.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | OllamaEmbeddingProvider | Local | Complete (`embedding-ollama`) |
//!
//! ### Development/Testing
//! - **Null**: deterministic vectors, no I/O
//!
//! ### Local/Privacy-First
//! - **Ollama**: local LLM server with embedding models

pub mod null;
pub mod ollama;
pub mod ollama_client;

// Re-export for convenience
pub use null::NullEmbeddingProvider;
pub use ollama::OllamaEmbeddingProvider;
pub use ollama_client::OllamaClient;
