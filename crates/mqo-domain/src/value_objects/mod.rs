//! Value Objects
//!
//! Immutable values produced and consumed by embedding providers.

/// Embedding vector type
pub mod embedding;
/// Vector space naming
pub mod vector_name;

pub use embedding::Vector;
pub use vector_name::VectorName;
