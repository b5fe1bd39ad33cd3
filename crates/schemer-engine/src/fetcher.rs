//! Scheme fetching.
//!
//! [`SchemeFetcher`] builds the request URL from a base color and a mode
//! fragment, issues exactly one request, and decodes the body. There is no
//! retry and no backoff; failures are returned to the caller as
//! [`SchemeError`].

use crate::color::strip_marker;
use crate::config::Config;
use crate::scheme::SchemeResponse;
use crate::transport::Transport;
use tracing::warn;

/// Fetches color schemes from the color API.
#[derive(Debug, Clone)]
pub struct SchemeFetcher<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> SchemeFetcher<T> {
    /// Create a fetcher for the given endpoint.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Create a fetcher for the endpoint named in `config`.
    pub fn from_config(config: &Config, transport: T) -> Self {
        Self::new(config.api_base_url.clone(), transport)
    }

    /// The endpoint this fetcher talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for a color and mode.
    ///
    /// A leading `#` on the color is dropped. The mode is an opaque query
    /// fragment and is appended as-is.
    pub fn scheme_url(&self, hex_color: &str, mode: &str) -> String {
        let hex = strip_marker(hex_color);
        if mode.is_empty() {
            format!("{}?hex={hex}", self.base_url)
        } else {
            format!("{}?hex={hex}&{mode}", self.base_url)
        }
    }

    /// Fetch the scheme for `hex_color` using `mode`.
    pub async fn fetch_scheme(
        &self,
        hex_color: &str,
        mode: &str,
    ) -> Result<SchemeResponse, SchemeError> {
        let url = self.scheme_url(hex_color, mode);

        let body = self.transport.get(&url).await.inspect_err(|e| {
            warn!(%url, error = %e, "scheme request failed");
        })?;

        SchemeResponse::from_json(&body).map_err(|e| {
            warn!(%url, error = %e, "scheme response could not be decoded");
            SchemeError::Decode(e)
        })
    }
}

/// Errors that can occur while fetching a scheme.
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    /// The request failed or returned a non-OK status.
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The transport could not be started.
    #[error("Failed to start request: {0}")]
    Spawn(#[source] std::io::Error),

    /// The request did not finish within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The response body was not a valid scheme.
    #[error("Malformed scheme response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SchemeError {
    /// Build a network error for `url`.
    pub fn network(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error belongs to the network family (as opposed to
    /// a decode failure).
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::Decode(_))
    }
}
