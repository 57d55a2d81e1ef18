use super::{CredentialError, CredentialProvider, Credentials};
use async_trait::async_trait;

/// A provider of an access token already held by a server session.
#[derive(Debug, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Creates a provider.
    pub const fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl CredentialProvider for StaticTokenProvider {
    fn name(&self) -> &'static str {
        "session"
    }

    async fn credentials(&self) -> Result<Credentials, CredentialError> {
        self.token
            .clone()
            .map(Credentials::Bearer)
            .ok_or(CredentialError::MissingToken)
    }
}
