//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation services |

/// Embedding provider port
pub mod embedding;

pub use embedding::EmbeddingProvider;
