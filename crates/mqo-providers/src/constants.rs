//! Provider Constants
//!
//! Constants specific to provider implementations. Naming and probing policy
//! shared by every provider lives in `mqo_domain::constants`.

use std::time::Duration;

// ============================================================================
// OLLAMA PROVIDER CONSTANTS
// ============================================================================

/// Backend tag used as the vector name prefix for Ollama models
pub const OLLAMA_PROVIDER_NAME: &str = "ollama";

/// Default Ollama server URL
pub const OLLAMA_DEFAULT_URL: &str = "http://localhost:11434";

/// Default Ollama embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

/// Ollama single-prompt embedding endpoint
pub const OLLAMA_EMBEDDINGS_PATH: &str = "/api/embeddings";

/// Scheme assumed when an Ollama host is configured without one
pub const OLLAMA_DEFAULT_SCHEME: &str = "http";

// ============================================================================
// NULL PROVIDER CONSTANTS
// ============================================================================

/// Backend tag of the null provider
pub const NULL_PROVIDER_NAME: &str = "null";

/// Default model identifier of the null provider
pub const NULL_DEFAULT_MODEL: &str = "null-test";

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// DISPATCH CONSTANTS
// ============================================================================

/// Default number of blocking backend calls allowed in flight
pub const DEFAULT_MAX_BLOCKING_WORKERS: usize = 4;

/// Default number of documents embedded concurrently by one `embed_documents` call
pub const DEFAULT_DOCUMENT_CONCURRENCY: usize = 1;
