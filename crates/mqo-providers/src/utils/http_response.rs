//! HTTP Response Utilities
//!
//! Helper functions for processing blocking HTTP responses from embedding
//! backends.

use mqo_domain::error::{Error, Result};
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;

/// Format error message for embedding backend
fn backend_error(provider: &str, context: &str, details: &str) -> Error {
    Error::backend(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body into `T`
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed body on success. A non-success status or a body that does not
    /// match `T` is a backend error.
    pub fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                404 => backend_error(provider_name, "model or endpoint not found", &error_text),
                500..=599 => backend_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => backend_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        let body = response
            .text()
            .map_err(|e| backend_error(provider_name, "response read failed", &e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| backend_error(provider_name, "response parse failed", &e.to_string()))
    }
}
