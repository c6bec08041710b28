//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::sync::Arc;

use async_trait::async_trait;

use mqo_domain::error::Result;
use mqo_domain::ports::providers::EmbeddingProvider;
use mqo_domain::value_objects::{Vector, VectorName};

use crate::constants::{EMBEDDING_DIMENSION_NULL, NULL_DEFAULT_MODEL, NULL_PROVIDER_NAME};
use crate::dispatch::BlockingDispatcher;
use crate::registry::{EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry};

/// Null embedding provider for testing
///
/// Returns fixed-size vectors whose values depend only on the input text,
/// so the same text always maps to the same vector.
///
/// # Example
///
/// ```rust
/// use mqo_providers::embedding::NullEmbeddingProvider;
/// use mqo_providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// assert_eq!(provider.vector_name().as_str(), "null-null-test");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    model: String,
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_model(NULL_DEFAULT_MODEL, EMBEDDING_DIMENSION_NULL)
    }

    /// Create a null provider reporting `model` and producing `dimensions` values
    pub fn with_model(model: impl Into<String>, dimensions: usize) -> Self {
        Self {
            model: model.into(),
            dimensions: dimensions.max(1),
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Dimensionality of the produced vectors
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed_text(&self, text: &str) -> Vector {
        let hash = text.chars().map(|c| c as u32).fold(0u32, u32::wrapping_add);
        let base_value = (hash % 1000) as f32 / 1000.0;

        (0..self.dimensions)
            .map(|j| {
                let variation = (j as f32 * 0.01).sin();
                (base_value + variation * 0.1).clamp(0.0, 1.0)
            })
            .collect()
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_documents(&self, documents: &[String]) -> Result<Vec<Vector>> {
        Ok(documents.iter().map(|d| self.embed_text(d)).collect())
    }

    async fn embed_query(&self, query: &str) -> Result<Vector> {
        Ok(self.embed_text(query))
    }

    fn vector_name(&self) -> VectorName {
        VectorName::from_model(NULL_PROVIDER_NAME, &self.model)
    }

    async fn vector_size(&self) -> Result<usize> {
        Ok(self.dimensions)
    }

    fn provider_name(&self) -> &str {
        NULL_PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_factory(
    config: &EmbeddingProviderConfig,
    _dispatcher: Arc<BlockingDispatcher>,
) -> Result<Arc<dyn EmbeddingProvider>> {
    let model = config.model.as_deref().unwrap_or(NULL_DEFAULT_MODEL);
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_NULL);
    Ok(Arc::new(NullEmbeddingProvider::with_model(model, dimensions)))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: NULL_PROVIDER_NAME,
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
