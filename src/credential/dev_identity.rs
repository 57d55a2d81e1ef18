use super::{CredentialError, CredentialProvider, Credentials, DevIdentity};
use async_trait::async_trait;

/// A provider of a fixed development identity.
#[derive(Debug)]
pub struct DevIdentityProvider {
    identity: DevIdentity,
}

impl DevIdentityProvider {
    /// Creates a provider.
    pub const fn new(identity: DevIdentity) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl CredentialProvider for DevIdentityProvider {
    fn name(&self) -> &'static str {
        "development"
    }

    async fn credentials(&self) -> Result<Credentials, CredentialError> {
        Ok(Credentials::DevIdentity(self.identity.clone()))
    }
}
