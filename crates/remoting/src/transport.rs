//! # Transport Abstraction
//!
//! The boundary to whatever actually executes a request descriptor.
//!
//! ## Philosophy
//!
//! - **Descriptor-Oriented**: The transport receives a fully assembled
//!   [`Request`]. It never builds paths or picks headers.
//! - **Request-Response**: One request, one response. Pooling, TLS and
//!   socket-level retries live behind this trait.

use std::fmt;

use url::Url;

use crate::request::Request;

/// Errors that occur at the network/transport layer.
#[derive(Debug, Clone)]
pub enum Error {
    /// The peer is unreachable or the connection was dropped.
    ConnectionLost(String),
    /// The descriptor could not be turned into a wire request.
    InvalidRequest(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionLost(msg) => write!(f, "Connection lost: {}", msg),
            Self::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Self::InvalidRequest(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Raw response handed back by a transport. The body is not interpreted here.
pub type Response = http::Response<Vec<u8>>;

/// Executes request descriptors against an endpoint.
///
/// This trait is designed to be object-safe (`Arc<dyn Transport>`).
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Sends `request` to `endpoint` and waits for the response.
    ///
    /// # invariants
    /// - Must return `Ok(response)` for any response received, whatever its status.
    /// - Must return `Err` if nothing was received.
    /// - Must return `Err(InvalidRequest)` if the descriptor does not form a
    ///   valid wire request (see [`Request::into_http`]).
    /// - Should not interpret the body.
    async fn execute(&self, endpoint: &Url, request: Request) -> Result<Response>;
}
