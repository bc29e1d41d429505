//! # Request Descriptor
//!
//! A verb, a canonical path and a header multimap, ready to hand to a
//! transport. Built fresh per call; it has no identity beyond that call.

use http::HeaderMap;
use http::HeaderName;
use http::HeaderValue;
use http::Method;
use url::Url;

/// An assembled protocol request that has not been dispatched.
#[derive(Clone, Debug)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Appends a header value. Existing values under the same name are kept.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Path segments after the leading `/`, mount point included.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').skip(1)
    }

    /// Converts into an `http::Request` addressed at the origin of `endpoint`.
    ///
    /// The endpoint's own path is ignored; the mount point already lives in
    /// the descriptor path. Fails if the joined URI is not a valid `http::Uri`.
    pub fn into_http<B>(self, endpoint: &Url, body: B) -> Result<http::Request<B>, http::Error> {
        let uri = format!("{}{}", endpoint.origin().ascii_serialization(), self.path);
        let mut request = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(body)?;
        *request.headers_mut() = self.headers;
        Ok(request)
    }
}
