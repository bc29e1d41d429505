//! # Transaction Provider
//!
//! Entry point for transaction propagation: maps a URI to the peer handle
//! of the participant behind it.

use std::sync::Arc;

use remoting::ClientConfig;
use remoting::ContextRegistry;
use remoting::TargetContextResolver;
use tracing::debug;
use tracing::warn;
use url::Url;

use crate::error::Error;
use crate::error::Result;
use crate::peer::TransactionPeer;
use crate::scheme::Scheme;

#[derive(Clone)]
pub struct TransactionProvider {
    resolver: Arc<dyn TargetContextResolver>,
    config: ClientConfig,
}

impl TransactionProvider {
    pub fn new(resolver: Arc<dyn TargetContextResolver>, config: ClientConfig) -> Self {
        Self { resolver, config }
    }

    /// Provider backed by the process-wide registry and default configuration.
    pub fn with_global_registry() -> Self {
        Self::new(Arc::new(ContextRegistry::global()), ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exact, case-sensitive check against the scheme allow-list.
    pub fn supports_scheme(&self, scheme: &str) -> bool {
        Scheme::parse(scheme).is_some()
    }

    /// Returns the peer handle bound to the endpoint of `uri`.
    ///
    /// Unsupported schemes fail before the resolver is consulted.
    pub fn get_peer_handle(&self, uri: &Url) -> Result<TransactionPeer> {
        let scheme = match Scheme::try_from(uri.scheme()) {
            Ok(scheme) => scheme,
            Err(e) => {
                warn!(uri = %uri, "rejecting transaction peer with unsupported scheme");
                return Err(e);
            }
        };

        let context = self.resolver.resolve(uri).map_err(Error::Resolution)?;
        debug!(endpoint = %context.key(), "bound transaction peer");

        Ok(TransactionPeer::new(
            scheme,
            context,
            self.config.mount_point.clone(),
            self.config.protocol_version,
        ))
    }

    /// Parses `uri` and returns its peer handle.
    ///
    /// The scheme is checked as written, before URI parsing lowercases it.
    pub fn get_peer_handle_str(&self, uri: &str) -> Result<TransactionPeer> {
        let raw_scheme = uri.split_once(':').map_or(uri, |(scheme, _)| scheme);
        if !self.supports_scheme(raw_scheme) {
            warn!(uri = %uri, "rejecting transaction peer with unsupported scheme");
            return Err(Error::UnsupportedScheme(raw_scheme.to_string()));
        }

        let uri = remoting::context::parse_uri(uri)?;
        self.get_peer_handle(&uri)
    }
}
