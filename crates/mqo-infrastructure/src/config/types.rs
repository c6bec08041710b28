//! Configuration types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use mqo_providers::EmbeddingProviderConfig;
use mqo_providers::constants::{
    DEFAULT_DOCUMENT_CONCURRENCY, DEFAULT_EMBEDDING_TIMEOUT, DEFAULT_MAX_BLOCKING_WORKERS,
    OLLAMA_DEFAULT_MODEL, OLLAMA_DEFAULT_URL, OLLAMA_PROVIDER_NAME,
};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Embedding provider settings
    pub embedding: EmbeddingConfig,
    /// Blocking-call dispatcher settings
    pub dispatcher: DispatcherConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name ("ollama", "null")
    pub provider: String,
    /// Model identifier passed to the backend
    pub model: String,
    /// Backend endpoint
    pub url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Documents embedded concurrently per `embed_documents` call
    pub document_concurrency: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: OLLAMA_PROVIDER_NAME.to_string(),
            model: OLLAMA_DEFAULT_MODEL.to_string(),
            url: OLLAMA_DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT.as_secs(),
            document_concurrency: DEFAULT_DOCUMENT_CONCURRENCY,
        }
    }
}

impl EmbeddingConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Registry configuration for this provider
    pub fn to_provider_config(&self) -> EmbeddingProviderConfig {
        EmbeddingProviderConfig::new(self.provider.clone())
            .with_model(self.model.clone())
            .with_base_url(self.url.clone())
            .with_timeout(self.timeout())
            .with_document_concurrency(self.document_concurrency)
    }
}

/// Blocking-call dispatcher configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Maximum number of blocking backend calls in flight
    pub max_workers: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_BLOCKING_WORKERS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
