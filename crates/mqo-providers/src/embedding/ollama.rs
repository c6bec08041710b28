//! Ollama Embedding Provider
//!
//! Implements the EmbeddingProvider port on top of Ollama's blocking
//! single-prompt embedding API. Each backend call runs on the injected
//! `BlockingDispatcher`; the async caller only awaits its result.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use tracing::error;

use mqo_domain::constants::VECTOR_SIZE_PROBE_TEXT;
use mqo_domain::error::{Error, Result};
use mqo_domain::ports::providers::EmbeddingProvider;
use mqo_domain::value_objects::{Vector, VectorName};

use super::ollama_client::{self, OllamaClient};
use crate::constants::{
    DEFAULT_DOCUMENT_CONCURRENCY, DEFAULT_EMBEDDING_TIMEOUT, OLLAMA_PROVIDER_NAME,
};
use crate::dispatch::BlockingDispatcher;

/// Ollama embedding provider
///
/// Holds the model identifier, the server host and the blocking client
/// created for them. The client is only handed to workers running this
/// provider's own calls.
///
/// ## Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use mqo_providers::BlockingDispatcher;
/// use mqo_providers::embedding::OllamaEmbeddingProvider;
///
/// fn example() -> mqo_providers::Result<()> {
///     let dispatcher = Arc::new(BlockingDispatcher::new(4));
///     let provider = OllamaEmbeddingProvider::new(
///         "nomic-embed-text",
///         "http://localhost:11434",
///         dispatcher,
///     )?;
///     assert_eq!(provider.model(), "nomic-embed-text");
///     Ok(())
/// }
/// ```
pub struct OllamaEmbeddingProvider {
    model: String,
    host: String,
    client: Arc<dyn OllamaClient>,
    dispatcher: Arc<BlockingDispatcher>,
    document_concurrency: usize,
}

impl OllamaEmbeddingProvider {
    /// Create a new Ollama embedding provider with the default request timeout
    ///
    /// # Arguments
    /// * `model` - Model name (e.g., "nomic-embed-text")
    /// * `host` - Ollama server URL (e.g., "http://localhost:11434")
    /// * `dispatcher` - Worker pool the blocking calls run on
    ///
    /// Fails with a configuration error when the Ollama client is not linked
    /// into this build or `host` is not a valid URL.
    pub fn new(
        model: impl Into<String>,
        host: impl Into<String>,
        dispatcher: Arc<BlockingDispatcher>,
    ) -> Result<Self> {
        Self::with_timeout(model, host, DEFAULT_EMBEDDING_TIMEOUT, dispatcher)
    }

    /// Create a new Ollama embedding provider with a custom request timeout
    pub fn with_timeout(
        model: impl Into<String>,
        host: impl Into<String>,
        timeout: Duration,
        dispatcher: Arc<BlockingDispatcher>,
    ) -> Result<Self> {
        let host = host.into();
        let client = ollama_client::connect(&host, timeout)?;
        Ok(Self::with_client(model, host, client, dispatcher))
    }

    /// Create a provider around an already constructed client
    pub fn with_client(
        model: impl Into<String>,
        host: impl Into<String>,
        client: Arc<dyn OllamaClient>,
        dispatcher: Arc<BlockingDispatcher>,
    ) -> Self {
        Self {
            model: model.into(),
            host: host.into(),
            client,
            dispatcher,
            document_concurrency: DEFAULT_DOCUMENT_CONCURRENCY,
        }
    }

    /// Embed up to `concurrency` documents of one `embed_documents` call at once.
    ///
    /// The default of 1 issues and completes the calls strictly in input order.
    /// Higher values keep the output order but overlap the round trips, still
    /// bounded by the dispatcher's worker limit.
    pub fn with_document_concurrency(mut self, concurrency: usize) -> Self {
        self.document_concurrency = concurrency.max(1);
        self
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the Ollama host this provider talks to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Number of documents embedded concurrently by `embed_documents`
    pub fn document_concurrency(&self) -> usize {
        self.document_concurrency
    }

    /// Embed one text through the dispatcher
    async fn embed_text(&self, text: String) -> Result<Vector> {
        let client = Arc::clone(&self.client);
        let model = self.model.clone();

        let vector = self
            .dispatcher
            .dispatch(move || client.embeddings(&model, &text))
            .await?;

        if vector.is_empty() {
            return Err(Error::backend(format!(
                "Ollama returned an empty embedding for model {}",
                self.model
            )));
        }
        Ok(vector)
    }

    async fn embed_all(&self, documents: &[String]) -> Result<Vec<Vector>> {
        if self.document_concurrency <= 1 {
            let mut embeddings = Vec::with_capacity(documents.len());
            for document in documents {
                embeddings.push(self.embed_text(document.clone()).await?);
            }
            return Ok(embeddings);
        }

        stream::iter(documents.iter().cloned())
            .map(|document| self.embed_text(document))
            .buffered(self.document_concurrency)
            .try_collect()
            .await
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed_documents(&self, documents: &[String]) -> Result<Vec<Vector>> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        self.embed_all(documents).await.inspect_err(|e| {
            error!(
                model = %self.model,
                documents = documents.len(),
                error = %e,
                "Failed to embed documents with model {}",
                self.model
            );
        })
    }

    async fn embed_query(&self, query: &str) -> Result<Vector> {
        self.embed_text(query.to_string()).await.inspect_err(|e| {
            error!(
                model = %self.model,
                error = %e,
                "Failed to embed query with model {}",
                self.model
            );
        })
    }

    fn vector_name(&self) -> VectorName {
        VectorName::from_model(OLLAMA_PROVIDER_NAME, &self.model)
    }

    async fn vector_size(&self) -> Result<usize> {
        let probe = self
            .embed_text(VECTOR_SIZE_PROBE_TEXT.to_string())
            .await
            .inspect_err(|e| {
                error!(
                    model = %self.model,
                    error = %e,
                    "Failed to get vector size for model {}",
                    self.model
                );
            })?;
        Ok(probe.len())
    }

    fn provider_name(&self) -> &str {
        OLLAMA_PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use crate::constants::{OLLAMA_DEFAULT_MODEL, OLLAMA_DEFAULT_URL};
use crate::registry::{EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry};

/// Factory function for creating Ollama embedding provider instances.
fn ollama_factory(
    config: &EmbeddingProviderConfig,
    dispatcher: Arc<BlockingDispatcher>,
) -> Result<Arc<dyn EmbeddingProvider>> {
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_MODEL.to_string());
    let host = config
        .base_url
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_URL.to_string());
    let timeout = config.timeout.unwrap_or(DEFAULT_EMBEDDING_TIMEOUT);

    let mut provider = OllamaEmbeddingProvider::with_timeout(model, host, timeout, dispatcher)?;
    if let Some(concurrency) = config.document_concurrency {
        provider = provider.with_document_concurrency(concurrency);
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: OLLAMA_PROVIDER_NAME,
    description: "Ollama embedding provider (nomic-embed-text, all-minilm, etc.)",
    factory: ollama_factory,
};
