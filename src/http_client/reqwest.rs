use super::{BareHttpClient, BareRequest, BareResponse, HttpClientError};
use async_trait::async_trait;
use log::trace;
use reqwest::{Client, ClientBuilder};

/// An HTTP client based on [`reqwest`].
#[derive(Debug, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an HTTP client.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ClientBuilder::new().build()?,
        })
    }
}

#[async_trait]
impl BareHttpClient for ReqwestHttpClient {
    async fn send(&self, request: &BareRequest) -> Result<BareResponse, HttpClientError> {
        trace!("sending a {} request to {}", &request.method, &request.url);

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = self.client.execute(builder.build()?).await?;

        trace!("got {} response from {}", response.status(), &request.url);

        let url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(HttpClientError::from);

        if let Err(error) = &body {
            trace!("failed to read a body from {}: {error}", &request.url);
        }

        Ok(BareResponse {
            url,
            status,
            headers,
            body,
        })
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, Method, StatusCode};
    use pretty_assertions::assert_eq;
    use std::{
        io::{Read, Write},
        net::{Shutdown, TcpListener},
        thread,
    };
    use url::Url;

    fn serve_once(response: &'static [u8]) -> (Url, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = vec![];
            let mut buffer = [0; 1024];

            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let count = stream.read(&mut buffer).unwrap();
                assert!(count > 0);
                request.extend_from_slice(&buffer[..count]);
            }

            stream.write_all(response).unwrap();
            stream.shutdown(Shutdown::Write).unwrap();
        });

        (url, handle)
    }

    fn get(url: Url) -> BareRequest {
        BareRequest {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn read_response() {
        let (url, handle) =
            serve_once(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]");

        let response = ReqwestHttpClient::new()
            .unwrap()
            .send(&get(url.join("clients/").unwrap()))
            .await
            .unwrap();

        handle.join().unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, Ok(b"[]".to_vec()));
    }

    #[tokio::test]
    async fn keep_status_on_truncated_body() {
        let (url, handle) = serve_once(
            b"HTTP/1.1 201 Created\r\ncontent-length: 100\r\nconnection: close\r\n\r\nshort",
        );

        let response = ReqwestHttpClient::new()
            .unwrap()
            .send(&get(url.join("tours/pickup").unwrap()))
            .await
            .unwrap();

        handle.join().unwrap();

        assert_eq!(response.status, StatusCode::CREATED);
        assert!(matches!(response.body, Err(HttpClientError::Http(_))));
    }

    #[tokio::test]
    async fn fail_without_server() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
        drop(listener);

        assert!(matches!(
            ReqwestHttpClient::new().unwrap().send(&get(url)).await,
            Err(HttpClientError::Http(_))
        ));
    }
}
