use crate::http_client::{BareHttpClient, BareRequest, BareResponse, HttpClientError};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use std::{collections::HashMap, sync::Mutex};
use url::Url;

#[derive(Debug)]
pub struct StubHttpClient {
    results: HashMap<String, Result<BareResponse, HttpClientError>>,
    requests: Mutex<Vec<BareRequest>>,
}

impl StubHttpClient {
    pub fn new(results: HashMap<String, Result<BareResponse, HttpClientError>>) -> Self {
        Self {
            results,
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> Vec<BareRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BareHttpClient for StubHttpClient {
    async fn send(&self, request: &BareRequest) -> Result<BareResponse, HttpClientError> {
        self.requests.lock().unwrap().push(request.clone());

        self.results
            .get(request.url.as_str())
            .expect("stub response")
            .clone()
    }
}

pub fn build_stub_response(
    url: &str,
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
) -> (String, Result<BareResponse, HttpClientError>) {
    let url = Url::parse(url).unwrap();

    (
        url.as_str().into(),
        Ok(BareResponse {
            url,
            status,
            headers,
            body: Ok(body),
        }),
    )
}

pub fn build_stub_error(url: &str, message: &str) -> (String, Result<BareResponse, HttpClientError>) {
    (
        Url::parse(url).unwrap().as_str().into(),
        Err(HttpClientError::Http(message.into())),
    )
}

pub fn build_stub_body_error(
    url: &str,
    status: StatusCode,
    message: &str,
) -> (String, Result<BareResponse, HttpClientError>) {
    let url = Url::parse(url).unwrap();

    (
        url.as_str().into(),
        Ok(BareResponse {
            url,
            status,
            headers: HeaderMap::new(),
            body: Err(HttpClientError::Http(message.into())),
        }),
    )
}
