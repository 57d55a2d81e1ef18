mod dev_identity;
mod error;
mod static_token;
mod token_endpoint;

pub use self::{
    dev_identity::DevIdentityProvider, error::CredentialError, static_token::StaticTokenProvider,
    token_endpoint::TokenEndpointProvider,
};
use crate::{
    Role,
    config::Config,
    context::ExecutionContext,
    header::{DEV_ROLE, DEV_SUB},
    http_client::BareHttpClient,
};
use alloc::sync::Arc;
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, header::AUTHORIZATION, header::InvalidHeaderValue};
use log::debug;

/// A fixed development identity which bypasses real credentials.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DevIdentity {
    role: Role,
    subject: String,
}

impl DevIdentity {
    /// Creates a development identity.
    pub const fn new(role: Role, subject: String) -> Self {
        Self { role, subject }
    }

    /// Returns a role.
    pub const fn role(&self) -> &Role {
        &self.role
    }

    /// Returns a subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Checks if the identity fits in header values.
    pub fn validate(&self) -> Result<(), InvalidHeaderValue> {
        self.headers().map(drop)
    }

    fn headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();

        headers.insert(DEV_ROLE, HeaderValue::from_str(self.role.as_str())?);
        headers.insert(DEV_SUB, HeaderValue::from_str(&self.subject)?);

        Ok(headers)
    }
}

/// Credentials attached to a request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Credentials {
    /// A bearer access token.
    Bearer(String),
    /// A development identity.
    DevIdentity(DevIdentity),
}

impl Credentials {
    /// Converts credentials into request headers.
    pub fn headers(&self) -> Result<HeaderMap, CredentialError> {
        match self {
            Self::Bearer(token) => {
                let mut value = HeaderValue::try_from(format!("Bearer {token}"))?;
                value.set_sensitive(true);

                let mut headers = HeaderMap::new();
                headers.insert(AUTHORIZATION, value);
                Ok(headers)
            }
            Self::DevIdentity(identity) => Ok(identity.headers()?),
        }
    }
}

/// A source of credentials.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Returns a name used in logs.
    fn name(&self) -> &'static str;

    /// Obtains credentials.
    async fn credentials(&self) -> Result<Credentials, CredentialError>;
}

/// An ordered list of credential providers.
///
/// The first provider which succeeds wins.
pub struct CredentialChain {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl CredentialChain {
    /// Creates a credential chain.
    pub const fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// Creates a credential chain for a configuration and execution context.
    pub fn from_config(
        config: &Config,
        context: &ExecutionContext,
        client: Arc<dyn BareHttpClient>,
    ) -> Self {
        let mut providers: Vec<Box<dyn CredentialProvider>> = vec![];

        if !config.dev_mode() {
            match context.origin() {
                Some(origin) => providers.push(Box::new(TokenEndpointProvider::new(
                    origin.clone(),
                    config.token_path().into(),
                    client,
                ))),
                None => providers.push(Box::new(StaticTokenProvider::new(
                    config.access_token().map(ToOwned::to_owned),
                ))),
            }
        }

        if config.dev_identity_available()
            && let Some(identity) = config.dev_identity()
        {
            providers.push(Box::new(DevIdentityProvider::new(identity.clone())));
        }

        Self::new(providers)
    }

    /// Returns the number of providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if there is no provider.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolves credential headers.
    ///
    /// An empty header map is returned if every provider fails.
    pub async fn headers(&self) -> HeaderMap {
        for provider in &self.providers {
            match provider
                .credentials()
                .await
                .and_then(|credentials| credentials.headers())
            {
                Ok(headers) => {
                    debug!("using {} credentials", provider.name());
                    return headers;
                }
                Err(error) => debug!("{} credentials unavailable: {error}", provider.name()),
            }
        }

        HeaderMap::new()
    }
}
