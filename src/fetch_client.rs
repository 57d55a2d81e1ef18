use crate::{
    base::{BaseCandidate, base_candidates},
    config::Config,
    context::ExecutionContext,
    credential::CredentialChain,
    header::TENANT_ID,
    http_client::{BareHttpClient, BareRequest, HttpClientError},
    request::Request,
    response::{FetchError, Response},
};
use alloc::sync::Arc;
use http::HeaderMap;
use log::{debug, error, warn};

/// A resilient API client.
///
/// It attaches tenant and credential headers and tries base candidates in
/// order until one of them answers with any HTTP status.
#[derive(Clone)]
pub struct FetchClient(Arc<FetchClientInner>);

struct FetchClientInner {
    client: Arc<dyn BareHttpClient>,
    config: Arc<Config>,
    context: ExecutionContext,
    credentials: CredentialChain,
    candidates: Vec<BaseCandidate>,
}

impl FetchClient {
    /// Creates a client with credentials derived from a configuration.
    pub fn new(
        client: Arc<dyn BareHttpClient>,
        config: Arc<Config>,
        context: ExecutionContext,
    ) -> Self {
        let credentials = CredentialChain::from_config(&config, &context, client.clone());

        Self::with_credentials(client, config, context, credentials)
    }

    /// Creates a client with a custom credential chain.
    pub fn with_credentials(
        client: Arc<dyn BareHttpClient>,
        config: Arc<Config>,
        context: ExecutionContext,
        credentials: CredentialChain,
    ) -> Self {
        let candidates = base_candidates(&config, &context);

        Self(
            FetchClientInner {
                client,
                config,
                context,
                credentials,
                candidates,
            }
            .into(),
        )
    }

    /// Returns base candidates in the order they are tried.
    pub fn candidates(&self) -> &[BaseCandidate] {
        &self.0.candidates
    }

    /// Returns a configuration.
    pub fn config(&self) -> &Config {
        &self.0.config
    }

    /// Returns an execution context.
    pub fn context(&self) -> &ExecutionContext {
        &self.0.context
    }

    /// Sends a request.
    ///
    /// This never fails. If no base candidate is reachable, a synthetic fetch
    /// error carrying the last transport error is returned instead.
    pub async fn request(&self, request: &Request) -> Response {
        debug!("sending {} {}", request.method(), request.path());

        let headers = self.headers(request).await;
        let mut last_error = HttpClientError::NoBase;

        for base in &self.0.candidates {
            match self.send(base, request, &headers).await {
                Ok(response) => return response,
                Err(error) => {
                    warn!("request to {base} failed: {error}");
                    last_error = error;
                }
            }
        }

        error!(
            "{} {} failed on every base: {last_error}",
            request.method(),
            request.path()
        );

        FetchError::new(last_error).into()
    }

    async fn send(
        &self,
        base: &BaseCandidate,
        request: &Request,
        headers: &HeaderMap,
    ) -> Result<Response, HttpClientError> {
        Ok(self
            .0
            .client
            .send(&BareRequest {
                method: request.method().clone(),
                url: base.join(request.path(), &self.0.context)?,
                headers: headers.clone(),
                body: request.body().map(ToOwned::to_owned),
            })
            .await?
            .into())
    }

    async fn headers(&self, request: &Request) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(TENANT_ID, self.0.config.tenant_id().clone());
        headers.extend(self.0.credentials.headers().await);
        headers.extend(request.headers().clone());

        headers
    }
}
