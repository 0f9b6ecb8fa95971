pub mod api_client;
pub mod api_models;

pub use api_client::{ApiClient, HttpTransport};
pub use api_models::{ApiError, ApiRequest, ApiResponse, HttpMethod, RequestOptions, TransportError};
