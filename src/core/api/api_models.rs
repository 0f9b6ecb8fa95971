// Request/response types for talking to the backend API.
//
// These are transport-agnostic. The infra layer turns an `ApiRequest` into a
// real HTTP call and hands back an `ApiResponse` with the raw body.

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Header every request carries unless the caller overrides it.
pub const DEFAULT_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

// ============================================================================
// ERRORS
// ============================================================================

/// The request never produced a response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request could not be built: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    Request(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Response (HTTP {status}) is not valid JSON: {source}")]
    Parse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// REQUEST / RESPONSE
// ============================================================================

#[allow(dead_code)] // Moderation only POSTs, but the client takes any verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller may customise on a request.
///
/// Anything left unset falls back to the client defaults: `GET`, no body and
/// only the JSON content type header.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<HttpMethod>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Merge caller options over the defaults.
    ///
    /// Header merging is shallow: caller headers are laid over the default
    /// set and win on a key collision.
    pub fn from_options(url: impl Into<String>, options: RequestOptions) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            DEFAULT_CONTENT_TYPE.0.to_string(),
            DEFAULT_CONTENT_TYPE.1.to_string(),
        );
        headers.extend(options.headers);

        Self {
            url: url.into(),
            method: options.method.unwrap_or_default(),
            headers,
            body: options.body,
        }
    }
}

/// Raw outcome of a completed round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
