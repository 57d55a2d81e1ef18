use super::{CredentialError, CredentialProvider, Credentials};
use crate::http_client::{BareHttpClient, BareRequest, HttpClientError};
use alloc::sync::Arc;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use log::trace;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBody {
    access_token: Option<String>,
}

/// A provider which asks a same-origin endpoint for an access token.
///
/// The endpoint answers `{ "accessToken": "..." }` and keeps the identity
/// provider protocol out of browsers.
pub struct TokenEndpointProvider {
    origin: Url,
    path: String,
    client: Arc<dyn BareHttpClient>,
}

impl TokenEndpointProvider {
    /// Creates a provider.
    pub fn new(origin: Url, path: String, client: Arc<dyn BareHttpClient>) -> Self {
        Self {
            origin,
            path,
            client,
        }
    }
}

#[async_trait]
impl CredentialProvider for TokenEndpointProvider {
    fn name(&self) -> &'static str {
        "token endpoint"
    }

    async fn credentials(&self) -> Result<Credentials, CredentialError> {
        let url = self
            .origin
            .join(&self.path)
            .map_err(HttpClientError::from)?;

        trace!("fetching an access token from {url}");

        let response = self
            .client
            .send(&BareRequest {
                method: Method::GET,
                url,
                headers: HeaderMap::new(),
                body: None,
            })
            .await?;

        if !response.status.is_success() {
            return Err(CredentialError::Status(response.status));
        }

        serde_json::from_slice::<TokenBody>(&response.body?)?
            .access_token
            .filter(|token| !token.is_empty())
            .map(Credentials::Bearer)
            .ok_or(CredentialError::MissingToken)
    }
}
