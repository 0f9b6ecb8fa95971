use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::collections::BTreeMap;

use crate::core::api::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, TransportError};

/// `HttpTransport` backed by a shared reqwest client.
///
/// The client is built without a timeout, so a hung backend hangs the
/// action that called it.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("job-moderation/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Ok(Self { client })
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, TransportError> {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::InvalidRequest(format!("header `{}`: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::InvalidRequest(format!("header `{}`: {}", name, e)))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self
            .client
            .request(Self::method(request.method), &request.url)
            .headers(Self::header_map(&request.headers)?);

        // Serialise by hand so `.json()` doesn't stomp on a caller's Content-Type.
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_methods() {
        assert_eq!(ReqwestTransport::method(HttpMethod::Get), Method::GET);
        assert_eq!(ReqwestTransport::method(HttpMethod::Post), Method::POST);
        assert_eq!(ReqwestTransport::method(HttpMethod::Delete), Method::DELETE);
    }

    #[test]
    fn test_builds_header_map() {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("X-Test".to_string(), "1".to_string());

        let map = ReqwestTransport::header_map(&headers).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map["content-type"], "application/json");
        assert_eq!(map["x-test"], "1");
    }

    #[test]
    fn test_rejects_invalid_header_name() {
        let mut headers = BTreeMap::new();
        headers.insert("Bad Header".to_string(), "1".to_string());

        let err = ReqwestTransport::header_map(&headers).unwrap_err();

        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let transport = ReqwestTransport::new().unwrap();
        let request = ApiRequest {
            // Port 9 (discard) on loopback is closed on any sane test machine.
            url: "http://127.0.0.1:9/api/jobs/1/approve".to_string(),
            method: HttpMethod::Post,
            headers: BTreeMap::new(),
            body: None,
        };

        let err = transport.send(&request).await.unwrap_err();

        assert!(matches!(err, TransportError::Request(_)));
    }
}
