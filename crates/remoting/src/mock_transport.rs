//! Mock transports for testing.
//!
//! These are used internally by the test suite and are not part of the public API.

use std::sync::Arc;

use http::HeaderValue;
use http::StatusCode;
use http::header::SET_COOKIE;
use tokio::sync::Mutex;
use url::Url;

use crate::request::Request;
use crate::transport;
use crate::transport::Response;
use crate::transport::Transport;

/// A request as seen by the transport.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub endpoint: Url,
    pub request: Request,
}

/// Records every request and answers with an empty 200.
///
/// Each descriptor is converted to its wire form first; one that does not
/// convert is rejected without being recorded.
///
/// Optionally hands out a `JSESSIONID` cookie on every reply.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    seen: Arc<Mutex<Vec<Recorded>>>,
    session_cookie: Option<&'static str>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_cookie(cookie: &'static str) -> Self {
        Self {
            seen: Arc::default(),
            session_cookie: Some(cookie),
        }
    }

    pub async fn seen(&self) -> Vec<Recorded> {
        self.seen.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, endpoint: &Url, request: Request) -> transport::Result<Response> {
        request.clone().into_http(endpoint, ())?;
        self.seen.lock().await.push(Recorded {
            endpoint: endpoint.clone(),
            request,
        });

        let mut response = Response::new(Vec::new());
        *response.status_mut() = StatusCode::OK;
        if let Some(cookie) = self.session_cookie {
            response
                .headers_mut()
                .append(SET_COOKIE, HeaderValue::from_static(cookie));
        }
        Ok(response)
    }
}

/// A transport whose peer is never reachable.
pub struct UnreachableTransport;

#[async_trait::async_trait]
impl Transport for UnreachableTransport {
    async fn execute(&self, endpoint: &Url, _request: Request) -> transport::Result<Response> {
        Err(transport::Error::ConnectionLost(format!("{} unreachable", endpoint)))
    }
}
