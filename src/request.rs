use http::{HeaderMap, HeaderName, HeaderValue, Method, header::CONTENT_TYPE};
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json";

/// An API request relative to an API root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    path: String,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a `GET` request without a body.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::GET,
            headers: Default::default(),
            body: None,
        }
    }

    /// Returns a path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a method.
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a body.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Sets a method.
    pub fn set_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets headers.
    pub fn set_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a header.
    pub fn set_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets a body.
    pub fn set_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON body and its content type.
    pub fn set_json(self, value: &impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(self
            .set_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .set_body(serde_json::to_vec(value)?))
    }
}
