//! Configuration management
//!
//! Layered configuration (defaults, TOML file, `MQO_*` environment) for the
//! embedding provider, its dispatcher and logging.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DispatcherConfig, EmbeddingConfig, LoggingConfig};
