//! # MCP Qdrant Ollama - Infrastructure Layer
//!
//! Cross-cutting concerns around the embedding providers: layered
//! configuration, structured logging and wiring a configured provider
//! together with its blocking-call dispatcher.

/// Provider bootstrap from configuration
pub mod bootstrap;
/// Configuration types and loader
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Error context extensions
pub mod error_ext;
/// Structured logging with tracing
pub mod logging;

pub use bootstrap::create_embedding_provider;
pub use config::{AppConfig, ConfigLoader};
pub use logging::init_logging;
