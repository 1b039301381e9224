//! Clients for the third-party HTTP services petchat proxies.
//!
//! Each client wraps a shared [`reqwest::Client`] and a base URL taken from
//! [`ServerConfig`](crate::config::ServerConfig), so tests can point them at
//! a local stub.

pub mod cat_image;
pub mod web_search;

use std::time::Duration;

use serde::de::DeserializeOwned;

pub use cat_image::CatImageClient;
pub use web_search::{SearchResponse, SearchResult, WebSearchClient};

/// Upper bound for a single outbound request.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures talking to a third-party service.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("{service} returned HTTP {status}")]
    Status { service: &'static str, status: u16 },

    /// The body did not have the expected shape.
    #[error("{service} returned an unexpected response")]
    UnexpectedResponse { service: &'static str },
}

impl UpstreamError {
    /// Message safe to show to API clients.
    pub fn public_message(&self) -> String {
        match self {
            UpstreamError::Request { service, .. } => format!("Failed to connect to {service}"),
            UpstreamError::Status { service, .. } => {
                format!("{service} is temporarily unavailable")
            }
            UpstreamError::UnexpectedResponse { service } => {
                format!("{service} returned an unexpected response")
            }
        }
    }
}

/// Send `request` and decode a JSON body of type `T`.
async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    service: &'static str,
) -> Result<T, UpstreamError> {
    let response = request
        .timeout(UPSTREAM_TIMEOUT)
        .send()
        .await
        .map_err(|source| UpstreamError::Request { service, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            service,
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|_| UpstreamError::UnexpectedResponse { service })
}
