//! # Protocol Client
//!
//! Routes request descriptors to the endpoint they target. The client
//! resolves the target context, applies its session affinity, hands the
//! request to the transport and records affinity changes from the reply.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::context;
use crate::registry::ContextRegistry;
use crate::registry::TargetContextResolver;
use crate::request::Request;
use crate::transport;
use crate::transport::Response;
use crate::transport::Transport;

#[derive(Debug)]
pub enum Error {
    Resolve(context::Error),
    Transport(transport::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolve(e) => write!(f, "Resolution error: {}", e),
            Self::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<context::Error> for Error {
    fn from(e: context::Error) -> Self {
        Self::Resolve(e)
    }
}

impl From<transport::Error> for Error {
    fn from(e: transport::Error) -> Self {
        Self::Transport(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client dispatching descriptors over a transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    resolver: Arc<dyn TargetContextResolver>,
}

impl Client {
    pub fn new(transport: Arc<dyn Transport>, resolver: Arc<dyn TargetContextResolver>) -> Self {
        Self { transport, resolver }
    }

    /// Client backed by the process-wide registry.
    pub fn with_global_registry(transport: Arc<dyn Transport>) -> Self {
        Self::new(transport, Arc::new(ContextRegistry::global()))
    }

    /// Sends `request` to the endpoint of `uri`.
    ///
    /// Resolution failures return before the transport is touched.
    pub async fn send(&self, uri: &Url, mut request: Request) -> Result<Response> {
        let context = self.resolver.resolve(uri)?;
        context.apply_affinity(&mut request);

        debug!(
            endpoint = %context.key(),
            method = %request.method(),
            path = request.path(),
            "dispatching request"
        );
        let response = self.transport.execute(context.uri(), request).await?;

        if context.update_affinity(response.headers()) {
            debug!(endpoint = %context.key(), "session affinity updated");
        }
        Ok(response)
    }
}
