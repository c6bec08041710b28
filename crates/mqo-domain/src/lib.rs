//! # MCP Qdrant Ollama - Domain Layer
//!
//! Core types shared by every embedding backend: the `EmbeddingProvider`
//! port, the `VectorName` value object and the error taxonomy.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `error` | `Error`, `Result` |
//! | `ports` | `EmbeddingProvider` |
//! | `value_objects` | `Vector`, `VectorName` |
//! | `constants` | Probe text, vector name separators |

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Provider ports
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::providers::EmbeddingProvider;
pub use value_objects::{Vector, VectorName};
