use crate::http_client::HttpClientError;
use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::Utf8Error,
};

/// An error reading a response body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResponseError {
    /// A body failed to arrive after a status.
    Body(HttpClientError),
    /// No response was received at all.
    Fetch(HttpClientError),
    /// A body is not valid JSON for a requested type.
    Json(Arc<str>),
    /// A body is not valid UTF-8.
    Utf8(Arc<str>),
}

impl Error for ResponseError {}

impl Display for ResponseError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body(error) => write!(formatter, "failed to read response body: {error}"),
            Self::Fetch(error) => write!(formatter, "network request failed: {error}"),
            Self::Json(error) => write!(formatter, "{error}"),
            Self::Utf8(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string().into())
    }
}

impl From<Utf8Error> for ResponseError {
    fn from(error: Utf8Error) -> Self {
        Self::Utf8(error.to_string().into())
    }
}
