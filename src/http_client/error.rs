use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// A transport-level HTTP client error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HttpClientError {
    /// A connection, DNS or protocol failure before any response.
    Http(Arc<str>),
    /// No base URL to send a request to.
    NoBase,
    /// A relative base used without a browser origin.
    RelativeBase,
    /// A URL parse error.
    UrlParse(Arc<str>),
}

impl Error for HttpClientError {}

impl Display for HttpClientError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(formatter, "{error}"),
            Self::NoBase => write!(formatter, "no base URL"),
            Self::RelativeBase => write!(formatter, "relative base without origin"),
            Self::UrlParse(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<url::ParseError> for HttpClientError {
    fn from(error: url::ParseError) -> Self {
        Self::UrlParse(error.to_string().into())
    }
}
