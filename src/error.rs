use crate::{ConfigError, response::ResponseError};
use core::{
    error,
    fmt::{self, Display, Formatter},
};

/// A top-level error.
#[derive(Debug)]
pub enum Error {
    /// A configuration error.
    Config(ConfigError),
    /// An invalid command line argument.
    InvalidArgument(String),
    /// A response reading error.
    Response(ResponseError),
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(formatter, "{error}"),
            Self::InvalidArgument(message) => write!(formatter, "invalid argument: {message}"),
            Self::Response(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<ResponseError> for Error {
    fn from(error: ResponseError) -> Self {
        Self::Response(error)
    }
}
