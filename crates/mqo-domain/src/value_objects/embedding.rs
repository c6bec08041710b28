//! Semantic Embedding Value Objects

/// Dense embedding of a text.
///
/// The length is fixed for a given (model, backend) pair and equals the
/// value reported by `EmbeddingProvider::vector_size`.
pub type Vector = Vec<f32>;
