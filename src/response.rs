mod error;

pub use self::error::ResponseError;
use crate::http_client::{BareResponse, HttpClientError};
use core::str;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// A status text of a synthetic fetch error.
pub const NETWORK_FAILURE_STATUS_TEXT: &str = "Network request failed";

/// A normalized response.
///
/// HTTP error statuses are real responses. Only a request which never reached
/// any server becomes a [`FetchError`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Response {
    /// A response received from a server.
    Http(HttpResponse),
    /// A synthetic error produced when no server was reached.
    Failed(FetchError),
}

impl Response {
    /// Returns `true` for a successful status.
    pub fn ok(&self) -> bool {
        match self {
            Self::Http(response) => response.status.is_success(),
            Self::Failed(_) => false,
        }
    }

    /// Returns a status code, which is `0` for fetch errors.
    pub fn status(&self) -> u16 {
        match self {
            Self::Http(response) => response.status.as_u16(),
            Self::Failed(_) => 0,
        }
    }

    /// Returns a status text.
    ///
    /// It is a canonical reason phrase of a status code and empty for
    /// non-standard codes. A reason phrase sent by a server is not kept.
    pub fn status_text(&self) -> &str {
        match self {
            Self::Http(response) => response.status.canonical_reason().unwrap_or_default(),
            Self::Failed(_) => NETWORK_FAILURE_STATUS_TEXT,
        }
    }

    /// Returns headers, which are empty for fetch errors.
    pub const fn headers(&self) -> &HeaderMap {
        match self {
            Self::Http(response) => &response.headers,
            Self::Failed(error) => &error.headers,
        }
    }

    /// Returns a transport error if no server was reached.
    pub const fn error(&self) -> Option<&HttpClientError> {
        match self {
            Self::Http(_) => None,
            Self::Failed(error) => Some(&error.error),
        }
    }

    /// Returns `true` for a synthetic fetch error.
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns a body.
    ///
    /// It fails if no server was reached or if a body failed to arrive after
    /// a status.
    pub fn body(&self) -> Result<&[u8], ResponseError> {
        match self {
            Self::Http(response) => response
                .body
                .as_deref()
                .map_err(|error| ResponseError::Body(error.clone())),
            Self::Failed(error) => Err(ResponseError::Fetch(error.error.clone())),
        }
    }

    /// Reads a body as text.
    pub fn text(&self) -> Result<String, ResponseError> {
        Ok(str::from_utf8(self.body()?)?.to_owned())
    }

    /// Reads a body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ResponseError> {
        Ok(serde_json::from_slice(self.body()?)?)
    }
}

impl From<BareResponse> for Response {
    fn from(response: BareResponse) -> Self {
        Self::Http(response.into())
    }
}

impl From<FetchError> for Response {
    fn from(error: FetchError) -> Self {
        Self::Failed(error)
    }
}

/// A response received from a server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
    body: Result<Vec<u8>, HttpClientError>,
}

impl HttpResponse {
    /// Returns a URL.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns a status code.
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<BareResponse> for HttpResponse {
    fn from(response: BareResponse) -> Self {
        Self {
            url: response.url,
            status: response.status,
            headers: response.headers,
            body: response.body,
        }
    }
}

/// A synthetic error for a request which reached no server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchError {
    error: HttpClientError,
    headers: HeaderMap,
}

impl FetchError {
    /// Creates a fetch error.
    pub fn new(error: HttpClientError) -> Self {
        Self {
            error,
            headers: HeaderMap::new(),
        }
    }

    /// Returns a last transport error.
    pub const fn error(&self) -> &HttpClientError {
        &self.error
    }
}
