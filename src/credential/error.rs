use crate::http_client::HttpClientError;
use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use http::StatusCode;

/// A credential error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CredentialError {
    /// A token endpoint could not be reached.
    Http(HttpClientError),
    /// A credential does not fit in a header value.
    InvalidHeaderValue,
    /// A token endpoint returned a malformed body.
    Json(Arc<str>),
    /// No access token is available.
    MissingToken,
    /// A token endpoint returned an error status.
    Status(StatusCode),
}

impl Error for CredentialError {}

impl Display for CredentialError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(formatter, "{error}"),
            Self::InvalidHeaderValue => write!(formatter, "invalid credential header value"),
            Self::Json(error) => write!(formatter, "{error}"),
            Self::MissingToken => write!(formatter, "access token not available"),
            Self::Status(status) => write!(formatter, "token endpoint returned {status}"),
        }
    }
}

impl From<HttpClientError> for CredentialError {
    fn from(error: HttpClientError) -> Self {
        Self::Http(error)
    }
}

impl From<http::header::InvalidHeaderValue> for CredentialError {
    fn from(_: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeaderValue
    }
}

impl From<serde_json::Error> for CredentialError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string().into())
    }
}
