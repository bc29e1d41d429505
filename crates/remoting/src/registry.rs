//! # Context Registry
//!
//! Process-wide cache of target contexts keyed by normalized endpoint.
//!
//! Uses DashMap so concurrent callers resolving different endpoints do not
//! contend on a global lock. Get-or-create is atomic per key: at most one
//! context is ever provisioned for an endpoint, even under concurrent first
//! access. Provisioning runs under the key's shard lock, so factories must
//! not perform I/O.

use std::sync::Arc;
use std::sync::OnceLock;

use dashmap::DashMap;
use tracing::debug;
use tracing::trace;
use url::Url;

use crate::context;
use crate::context::EndpointKey;
use crate::context::TargetContext;

/// Provisions the context for an endpoint on first use.
pub trait ContextFactory: Send + Sync + 'static {
    /// Builds the context for `key`. `uri` is the URI that triggered creation.
    ///
    /// Called at most once per key for the lifetime of a registry entry.
    fn create(&self, key: &EndpointKey, uri: &Url) -> context::Result<TargetContext>;
}

/// Factory that builds a fresh context with no session state.
#[derive(Clone, Debug, Default)]
pub struct DefaultContextFactory;

impl ContextFactory for DefaultContextFactory {
    fn create(&self, key: &EndpointKey, _uri: &Url) -> context::Result<TargetContext> {
        TargetContext::new(key.clone())
    }
}

/// Anything that can map a URI to its target context.
pub trait TargetContextResolver: Send + Sync {
    fn resolve(&self, uri: &Url) -> context::Result<Arc<TargetContext>>;
}

struct RegistryInner {
    contexts: DashMap<EndpointKey, Arc<TargetContext>>,
    factory: Box<dyn ContextFactory>,
}

/// Shared registry of target contexts. Cloning yields a handle to the same map.
#[derive(Clone)]
pub struct ContextRegistry {
    inner: Arc<RegistryInner>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::with_factory(DefaultContextFactory)
    }

    pub fn with_factory(factory: impl ContextFactory) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                contexts: DashMap::new(),
                factory: Box::new(factory),
            }),
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> ContextRegistry {
        static GLOBAL: OnceLock<ContextRegistry> = OnceLock::new();
        GLOBAL.get_or_init(ContextRegistry::new).clone()
    }

    /// Returns the context for `uri`, creating it if this is the first access.
    pub fn resolve(&self, uri: &Url) -> context::Result<Arc<TargetContext>> {
        let key = EndpointKey::from_url(uri)?;

        if let Some(existing) = self.inner.contexts.get(&key) {
            trace!(endpoint = %key, "target context hit");
            return Ok(Arc::clone(existing.value()));
        }

        let entry = self
            .inner
            .contexts
            .entry(key.clone())
            .or_try_insert_with(|| {
                debug!(endpoint = %key, "creating target context");
                self.inner.factory.create(&key, uri).map(Arc::new)
            })?;

        Ok(Arc::clone(entry.value()))
    }

    /// Parses `uri` and resolves it.
    pub fn resolve_str(&self, uri: &str) -> context::Result<Arc<TargetContext>> {
        self.resolve(&context::parse_uri(uri)?)
    }

    /// Returns an existing context without creating one.
    pub fn get(&self, key: &EndpointKey) -> Option<Arc<TargetContext>> {
        self.inner.contexts.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Drops the registry's reference to an endpoint's context.
    ///
    /// Holders of the old `Arc` keep it alive; the next resolve creates a new one.
    pub fn evict(&self, key: &EndpointKey) -> Option<Arc<TargetContext>> {
        let removed = self.inner.contexts.remove(key).map(|(_, context)| context);
        if removed.is_some() {
            debug!(endpoint = %key, "evicted target context");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.contexts.is_empty()
    }
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetContextResolver for ContextRegistry {
    fn resolve(&self, uri: &Url) -> context::Result<Arc<TargetContext>> {
        ContextRegistry::resolve(self, uri)
    }
}
