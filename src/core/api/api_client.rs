// API client - JSON over HTTP, nothing more.
//
// `fetch_json` is side-effect free: it returns the parsed payload or an
// `ApiError` and leaves it to the caller to tell the user. The status code is
// not inspected; a 4xx/5xx with a JSON body comes back exactly
// like a 2xx, and callers look at the payload's own `success` flag instead.

use super::api_models::{ApiError, ApiRequest, ApiResponse, RequestOptions, TransportError};
use async_trait::async_trait;
use serde_json::Value;

// ============================================================================
// TRANSPORT TRAIT (PORT)
// ============================================================================

/// Performs one HTTP round-trip.
///
/// No retries and no timeouts are expected from implementations; whatever
/// limits the underlying connection has are the only ones that apply.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

// ============================================================================
// CLIENT
// ============================================================================

pub struct ApiClient<T: HttpTransport> {
    transport: T,
    base_url: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Client that sends URLs to the transport exactly as given.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: None,
        }
    }

    /// Resolve relative URLs such as `/api/jobs/1/approve` against `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[allow(dead_code)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url.to_string(),
        }
    }

    /// Send a request and parse the response body as JSON.
    pub async fn fetch_json(&self, url: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let request = ApiRequest::from_options(self.resolve_url(url), options);
        tracing::debug!(method = %request.method, url = %request.url, "Sending API request");

        let response = self.transport.send(&request).await?;
        if !response.is_success() {
            tracing::warn!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                "API returned a non-success status"
            );
        }

        serde_json::from_str(&response.body).map_err(|source| ApiError::Parse {
            status: response.status,
            source,
        })
    }
}
