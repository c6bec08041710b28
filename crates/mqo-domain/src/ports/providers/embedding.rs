use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::{Vector, VectorName};

/// Text Embedding Interface
///
/// Contract every embedding backend implements so the vector database layer
/// can index and query text without knowing which service produced the
/// vectors.
///
/// # Default Implementations
///
/// `embed_query()` delegates to `embed_documents()` with a single item.
/// Providers override it when a single-item call is cheaper.
///
/// # Example
///
/// ```ignore
/// use mqo_domain::EmbeddingProvider;
///
/// let vectors = provider.embed_documents(&["fn main() {}".into()]).await?;
/// let query = provider.embed_query("entry point").await?;
/// let schema_key = provider.vector_name();
/// let dimensions = provider.vector_size().await?;
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed documents, returning one vector per input in input order.
    ///
    /// An empty slice yields an empty result without touching the backend.
    /// Any failure aborts the whole call; partial results are never returned.
    async fn embed_documents(&self, documents: &[String]) -> Result<Vec<Vector>>;

    /// Embed a single query text
    async fn embed_query(&self, query: &str) -> Result<Vector> {
        self.embed_documents(&[query.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::backend("No embedding returned for query"))
    }

    /// Name of the vector space for this model in the vector database.
    ///
    /// Pure: never contacts the backend.
    fn vector_name(&self) -> VectorName;

    /// Dimensionality of the vectors produced by this provider.
    ///
    /// Implementations may probe the backend to find out.
    async fn vector_size(&self) -> Result<usize>;

    /// Backend tag of this provider implementation (e.g., "ollama", "null")
    fn provider_name(&self) -> &str;
}
