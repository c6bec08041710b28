//! Unit tests for the embedding provider registry

use std::sync::Arc;

use mqo_providers::{
    BlockingDispatcher, EmbeddingProviderConfig, list_embedding_providers,
    resolve_embedding_provider,
};

fn dispatcher() -> Arc<BlockingDispatcher> {
    Arc::new(BlockingDispatcher::new(1))
}

#[test]
fn test_list_contains_builtin_providers() {
    let providers = list_embedding_providers();
    let names: Vec<&str> = providers.iter().map(|(name, _)| *name).collect();

    assert!(names.contains(&"ollama"));
    assert!(names.contains(&"null"));
    assert!(providers.iter().all(|(_, description)| !description.is_empty()));
}

#[test]
fn test_unknown_provider_is_configuration_error() {
    let config = EmbeddingProviderConfig::new("fastembed");
    let err = resolve_embedding_provider(&config, dispatcher())
        .err()
        .expect("unknown provider must be rejected");

    assert!(err.is_configuration());
    let message = err.to_string();
    assert!(message.contains("fastembed"));
    assert!(message.contains("ollama"));
}

#[tokio::test]
async fn test_resolve_null_provider() {
    let config = EmbeddingProviderConfig::new("null")
        .with_model("hash")
        .with_dimensions(32);
    let provider = resolve_embedding_provider(&config, dispatcher())
        .unwrap_or_else(|e| panic!("null provider: {e}"));

    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.vector_name().as_str(), "null-hash");
    assert_eq!(provider.vector_size().await.expect("size"), 32);
}

#[cfg(feature = "embedding-ollama")]
#[test]
fn test_resolve_ollama_provider_uses_config() {
    let config = EmbeddingProviderConfig::new("ollama")
        .with_model("mxbai-embed-large:335m")
        .with_base_url("http://localhost:11434")
        .with_document_concurrency(3);
    let provider = resolve_embedding_provider(&config, dispatcher())
        .unwrap_or_else(|e| panic!("ollama provider: {e}"));

    assert_eq!(provider.provider_name(), "ollama");
    assert_eq!(provider.vector_name().as_str(), "ollama-mxbai-embed-large_335m");
}

#[cfg(feature = "embedding-ollama")]
#[test]
fn test_resolve_ollama_defaults() {
    let config = EmbeddingProviderConfig::new("ollama");
    let provider = resolve_embedding_provider(&config, dispatcher())
        .unwrap_or_else(|e| panic!("ollama provider: {e}"));

    assert_eq!(provider.vector_name().as_str(), "ollama-nomic-embed-text");
}
