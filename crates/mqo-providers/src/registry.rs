//! Embedding Provider Registry
//!
//! Auto-registration system for embedding providers using linkme distributed slices.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::sync::Arc;
use std::time::Duration;

use mqo_domain::error::{Error, Result};
use mqo_domain::ports::providers::EmbeddingProvider;

use crate::dispatch::BlockingDispatcher;

/// Configuration for embedding provider creation
///
/// Contains all configuration options that an embedding provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingProviderConfig {
    /// Provider name (e.g., "ollama", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Embedding dimensions (if configurable)
    pub dimensions: Option<usize>,
    /// Per-request timeout
    pub timeout: Option<Duration>,
    /// Documents embedded concurrently per `embed_documents` call
    pub document_concurrency: Option<usize>,
}

impl EmbeddingProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the per-call document concurrency
    pub fn with_document_concurrency(mut self, concurrency: usize) -> Self {
        self.document_concurrency = Some(concurrency);
        self
    }
}

/// Factory signature shared by all registered providers
pub type EmbeddingProviderFactory =
    fn(&EmbeddingProviderConfig, Arc<BlockingDispatcher>) -> Result<Arc<dyn EmbeddingProvider>>;

/// Registry entry for embedding providers
///
/// Each embedding provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]`.
pub struct EmbeddingProviderEntry {
    /// Unique provider name (e.g., "ollama", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: EmbeddingProviderFactory,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Resolve embedding provider by name from registry
///
/// Creates the provider registered under `config.provider`, handing it the
/// dispatcher its blocking calls should run on.
///
/// # Errors
/// A configuration error when no provider has that name, or whatever the
/// provider's own construction reports.
///
/// # Example
///
/// ```ignore
/// let config = EmbeddingProviderConfig::new("ollama")
///     .with_base_url("http://localhost:11434")
///     .with_model("nomic-embed-text");
/// let provider = resolve_embedding_provider(&config, Arc::new(BlockingDispatcher::new(4)))?;
/// ```
pub fn resolve_embedding_provider(
    config: &EmbeddingProviderConfig,
    dispatcher: Arc<BlockingDispatcher>,
) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider_name = config.provider.as_str();

    if let Some(entry) = EMBEDDING_PROVIDERS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config, dispatcher);
    }

    let available: Vec<&str> = EMBEDDING_PROVIDERS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown embedding provider '{provider_name}'. Available providers: {available:?}"
    )))
}

/// List all registered embedding providers
///
/// Returns (name, description) tuples for all registered embedding providers.
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
