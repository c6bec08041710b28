//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

#[cfg(feature = "embedding-ollama")]
mod http_response;

#[cfg(feature = "embedding-ollama")]
pub use http_response::HttpResponseUtils;
