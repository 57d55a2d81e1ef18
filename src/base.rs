use crate::{
    config::{Config, DEFAULT_LOCAL_BASE},
    context::ExecutionContext,
    http_client::HttpClientError,
};
use core::fmt::{self, Display, Formatter};
use itertools::Itertools;
use url::Url;

/// A base URL tried when sending a request.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum BaseCandidate {
    /// An absolute base URL.
    Url(Url),
    /// A base relative to a browser origin.
    Relative,
}

impl BaseCandidate {
    /// Joins a request path onto the base.
    ///
    /// The base and the path are concatenated rather than resolved so that
    /// bases with path prefixes keep them.
    pub fn join(&self, path: &str, context: &ExecutionContext) -> Result<Url, HttpClientError> {
        let base = match self {
            Self::Url(url) => url,
            Self::Relative => context.origin().ok_or(HttpClientError::RelativeBase)?,
        };
        let base = base.as_str().trim_end_matches('/');

        Ok(Url::parse(&if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        })?)
    }
}

impl Display for BaseCandidate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(formatter, "{}", url.as_str().trim_end_matches('/')),
            Self::Relative => write!(formatter, "(same origin)"),
        }
    }
}

/// Resolves a primary base for an execution context.
pub fn resolve_base(config: &Config, context: &ExecutionContext) -> BaseCandidate {
    match context {
        ExecutionContext::Server => BaseCandidate::Url(
            config
                .internal_base()
                .or_else(|| config.public_base())
                .cloned()
                .unwrap_or_else(default_local_base),
        ),
        ExecutionContext::Browser { .. } => config
            .public_base()
            .cloned()
            .map_or(BaseCandidate::Relative, BaseCandidate::Url),
    }
}

/// Builds an ordered and deduplicated list of base candidates.
///
/// A base whose host is an internal alias gets a second candidate with the
/// browser hostname in a browser context.
pub fn base_candidates(config: &Config, context: &ExecutionContext) -> Vec<BaseCandidate> {
    let base = resolve_base(config, context);
    let fallback = match (&base, context.hostname()) {
        (BaseCandidate::Url(url), Some(hostname))
            if url
                .host_str()
                .is_some_and(|host| config.internal_aliases().any(|alias| alias == host)) =>
        {
            substitute_host(url, hostname).map(BaseCandidate::Url)
        }
        _ => None,
    };

    [Some(base), fallback].into_iter().flatten().unique().collect()
}

fn substitute_host(url: &Url, hostname: &str) -> Option<Url> {
    let mut url = url.clone();
    url.set_host(Some(hostname)).ok()?;
    Some(url)
}

fn default_local_base() -> Url {
    Url::parse(DEFAULT_LOCAL_BASE).expect("valid default base")
}
