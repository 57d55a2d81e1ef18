use url::Url;

/// An execution context in which requests are sent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExecutionContext {
    /// A server process with access to internal network names.
    Server,
    /// A browser page served from an origin.
    Browser {
        /// A page origin.
        origin: Url,
    },
}

impl ExecutionContext {
    /// Creates a browser context.
    pub const fn browser(origin: Url) -> Self {
        Self::Browser { origin }
    }

    /// Returns a browser origin.
    pub const fn origin(&self) -> Option<&Url> {
        match self {
            Self::Server => None,
            Self::Browser { origin } => Some(origin),
        }
    }

    /// Returns a browser hostname.
    pub fn hostname(&self) -> Option<&str> {
        self.origin()?.host_str()
    }
}
