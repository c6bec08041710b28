//! Provider bootstrap
//!
//! Builds the blocking-call dispatcher described by the configuration and
//! resolves the configured embedding provider on top of it. Meant to run
//! once at startup; the returned provider lives for the whole process.

use std::sync::Arc;

use tracing::info;

use mqo_domain::error::Result;
use mqo_domain::ports::providers::EmbeddingProvider;
use mqo_providers::{BlockingDispatcher, resolve_embedding_provider};

use crate::config::AppConfig;

/// Create the embedding provider described by `config`
///
/// # Errors
/// A configuration error when the provider is unknown or its backend client
/// is not available in this build. No backend call is made.
pub fn create_embedding_provider(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let dispatcher = Arc::new(BlockingDispatcher::new(config.dispatcher.max_workers));
    create_embedding_provider_with(config, dispatcher)
}

/// Create the embedding provider described by `config` on an existing dispatcher
///
/// Lets several providers share one worker limit.
pub fn create_embedding_provider_with(
    config: &AppConfig,
    dispatcher: Arc<BlockingDispatcher>,
) -> Result<Arc<dyn EmbeddingProvider>> {
    let max_workers = dispatcher.max_workers();
    let provider = resolve_embedding_provider(&config.embedding.to_provider_config(), dispatcher)?;

    info!(
        provider = provider.provider_name(),
        model = %config.embedding.model,
        vector_name = %provider.vector_name(),
        max_workers,
        "Embedding provider initialized"
    );
    Ok(provider)
}
