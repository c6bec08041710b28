//! # MCP Qdrant Ollama - Provider Implementations
//!
//! Implementations of the `EmbeddingProvider` port defined in `mqo-domain`,
//! plus the blocking-call dispatcher they run their backend calls on.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Ollama, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! mqo-providers = { version = "0.1", default-features = false, features = ["embedding-ollama"] }
//! ```
//!
//! Building without `embedding-ollama` keeps the provider registered, but its
//! construction reports a configuration error instead of linking the HTTP client.

// Re-export mqo-domain types commonly used with providers
pub use mqo_domain::error::{Error, Result};
pub use mqo_domain::ports::providers::EmbeddingProvider;

/// Provider-specific constants
pub mod constants;

/// Blocking-call dispatcher
pub mod dispatch;

/// Embedding provider implementations
pub mod embedding;

/// Embedding provider registry
pub mod registry;

/// Shared utilities for provider implementations
pub mod utils;

pub use dispatch::BlockingDispatcher;
pub use registry::{
    EmbeddingProviderConfig, list_embedding_providers, resolve_embedding_provider,
};
