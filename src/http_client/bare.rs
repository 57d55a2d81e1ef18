use super::HttpClientError;
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// A bare HTTP client which performs a single network round trip.
///
/// An `Err` result means that no HTTP status was obtained at all. Responses
/// with error statuses are returned as `Ok`.
#[async_trait]
pub trait BareHttpClient: Send + Sync {
    /// Sends a request.
    async fn send(&self, request: &BareRequest) -> Result<BareResponse, HttpClientError>;
}

/// A fully resolved HTTP request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BareRequest {
    /// A method.
    pub method: Method,
    /// An absolute URL.
    pub url: Url,
    /// Headers.
    pub headers: HeaderMap,
    /// A body.
    pub body: Option<Vec<u8>>,
}

/// A raw HTTP response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BareResponse {
    /// A URL the response came from.
    pub url: Url,
    /// A status code.
    pub status: StatusCode,
    /// Headers.
    pub headers: HeaderMap,
    /// A body, or an error if it failed to arrive after a status.
    pub body: Result<Vec<u8>, HttpClientError>,
}
