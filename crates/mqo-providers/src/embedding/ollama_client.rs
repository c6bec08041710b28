//! Blocking Ollama Client
//!
//! Synchronous client seam used by `OllamaEmbeddingProvider`. Every call
//! blocks the calling thread until Ollama answers, which is why the provider
//! only ever invokes it through the `BlockingDispatcher`.
//!
//! The HTTP implementation is linked only with the `embedding-ollama`
//! feature. `connect` reports its absence as a configuration error, before
//! any network access.

use std::sync::Arc;
use std::time::Duration;

use mqo_domain::error::Result;
#[cfg(not(feature = "embedding-ollama"))]
use mqo_domain::error::Error;

/// Synchronous Ollama embedding API
pub trait OllamaClient: Send + Sync {
    /// Embed `prompt` with `model`, blocking until the server replies
    fn embeddings(&self, model: &str, prompt: &str) -> Result<Vec<f32>>;
}

/// Create the blocking client for the Ollama server at `host`.
///
/// Performs no network access.
#[cfg(feature = "embedding-ollama")]
pub fn connect(host: &str, timeout: Duration) -> Result<Arc<dyn OllamaClient>> {
    Ok(Arc::new(http::HttpOllamaClient::new(host, timeout)?))
}

/// Create the blocking client for the Ollama server at `host`.
///
/// Always fails: this build does not link the Ollama HTTP client.
#[cfg(not(feature = "embedding-ollama"))]
pub fn connect(_host: &str, _timeout: Duration) -> Result<Arc<dyn OllamaClient>> {
    Err(Error::configuration(
        "Ollama client support is not available in this build. \
         Rebuild with the `embedding-ollama` feature enabled.",
    ))
}

#[cfg(feature = "embedding-ollama")]
pub use http::{HttpOllamaClient, normalize_host};

#[cfg(feature = "embedding-ollama")]
mod http {
    use std::time::Duration;

    use reqwest::Url;
    use reqwest::blocking::Client;
    use reqwest::header::CONTENT_TYPE;
    use serde::{Deserialize, Serialize};

    use mqo_domain::error::{Error, Result};

    use super::OllamaClient;
    use crate::constants::{
        CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, OLLAMA_DEFAULT_SCHEME,
        OLLAMA_EMBEDDINGS_PATH,
    };
    use crate::utils::HttpResponseUtils;

    #[derive(Serialize)]
    struct EmbeddingsRequest<'a> {
        model: &'a str,
        prompt: &'a str,
    }

    #[derive(Deserialize)]
    struct EmbeddingsResponse {
        embedding: Vec<f32>,
    }

    /// Ollama client over reqwest's blocking HTTP client
    pub struct HttpOllamaClient {
        endpoint: Url,
        timeout: Duration,
        http_client: Client,
    }

    impl HttpOllamaClient {
        /// Create a client for `host` with the given per-request timeout
        pub fn new(host: &str, timeout: Duration) -> Result<Self> {
            let base = normalize_host(host)?;
            let endpoint = Url::parse(&format!(
                "{}{}",
                base.as_str().trim_end_matches('/'),
                OLLAMA_EMBEDDINGS_PATH
            ))
            .map_err(|e| {
                Error::configuration_with_source(format!("Invalid Ollama host '{host}'"), e)
            })?;

            // The blocking client starts its own runtime; building it on a plain
            // thread keeps construction legal from inside an async context.
            let http_client = std::thread::spawn(move || Client::builder().timeout(timeout).build())
                .join()
                .map_err(|_| Error::configuration("Ollama HTTP client initialisation panicked"))?
                .map_err(|e| {
                    Error::configuration_with_source("Failed to create Ollama HTTP client", e)
                })?;

            Ok(Self {
                endpoint,
                timeout,
                http_client,
            })
        }
    }

    impl OllamaClient for HttpOllamaClient {
        fn embeddings(&self, model: &str, prompt: &str) -> Result<Vec<f32>> {
            let response = self
                .http_client
                .post(self.endpoint.clone())
                .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
                .json(&EmbeddingsRequest { model, prompt })
                .send()
                .map_err(|e| {
                    if e.is_timeout() {
                        Error::backend(format!(
                            "Ollama {} {:?}",
                            ERROR_MSG_REQUEST_TIMEOUT, self.timeout
                        ))
                    } else {
                        Error::backend_with_source("Ollama HTTP request failed", e)
                    }
                })?;

            let body: EmbeddingsResponse = HttpResponseUtils::check_and_parse(response, "Ollama")?;
            Ok(body.embedding)
        }
    }

    /// Parse an Ollama host setting into a base URL.
    ///
    /// A host given without scheme (`localhost:11434`) is treated as plain HTTP.
    pub fn normalize_host(host: &str) -> Result<Url> {
        let trimmed = host.trim();
        if trimmed.is_empty() {
            return Err(Error::configuration("Ollama host must not be empty"));
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("{OLLAMA_DEFAULT_SCHEME}://{trimmed}")
        };

        Url::parse(&with_scheme).map_err(|e| {
            Error::configuration_with_source(format!("Invalid Ollama host '{host}'"), e)
        })
    }
}
