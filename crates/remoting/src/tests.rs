//! Tests for the context registry and the client with mock transports.

use std::sync::Arc;
use std::sync::Barrier;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;

use http::Method;
use http::header::COOKIE;
use url::Url;

use crate::client;
use crate::client::Client;
use crate::context;
use crate::context::EndpointKey;
use crate::context::TargetContext;
use crate::mock_transport::RecordingTransport;
use crate::mock_transport::UnreachableTransport;
use crate::registry::ContextFactory;
use crate::registry::ContextRegistry;
use crate::request::Request;
use crate::transport;

/// Factory that counts how many contexts it provisioned.
#[derive(Clone, Default)]
struct CountingFactory {
    created: Arc<AtomicUsize>,
}

impl ContextFactory for CountingFactory {
    fn create(&self, key: &EndpointKey, _uri: &Url) -> context::Result<TargetContext> {
        self.created.fetch_add(1, Ordering::SeqCst);
        TargetContext::new(key.clone())
    }
}

/// Factory that refuses every endpoint.
struct RefusingFactory;

impl ContextFactory for RefusingFactory {
    fn create(&self, key: &EndpointKey, _uri: &Url) -> context::Result<TargetContext> {
        Err(context::Error::Factory(format!("refused {}", key)))
    }
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

// --- Registry ---

#[test]
fn test_same_endpoint_same_context() {
    let factory = CountingFactory::default();
    let registry = ContextRegistry::with_factory(factory.clone());

    let a = registry.resolve(&url("http://host:8080/a")).unwrap();
    let b = registry.resolve(&url("http://HOST:8080/b?x=1")).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(factory.created.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_distinct_endpoints_distinct_contexts() {
    let registry = ContextRegistry::new();

    let plain = registry.resolve(&url("http://host")).unwrap();
    let secure = registry.resolve(&url("https://host")).unwrap();
    let other_port = registry.resolve(&url("http://host:8080")).unwrap();

    assert!(!Arc::ptr_eq(&plain, &secure));
    assert!(!Arc::ptr_eq(&plain, &other_port));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_resolve_malformed_uri() {
    let registry = ContextRegistry::new();
    let result = registry.resolve_str("::not a uri::");
    assert!(matches!(result, Err(context::Error::InvalidUri { .. })));
    assert!(registry.is_empty());
}

#[test]
fn test_factory_failure_leaves_no_entry() {
    let registry = ContextRegistry::with_factory(RefusingFactory);
    let result = registry.resolve(&url("http://host"));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("refused http://host:80"));
    assert!(registry.is_empty());
}

#[test]
fn test_evict_then_recreate() {
    let factory = CountingFactory::default();
    let registry = ContextRegistry::with_factory(factory.clone());

    let first = registry.resolve(&url("http://host")).unwrap();
    let removed = registry.evict(first.key()).unwrap();
    assert!(Arc::ptr_eq(&first, &removed));
    assert!(registry.get(first.key()).is_none());

    let second = registry.resolve(&url("http://host")).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(factory.created.load(Ordering::SeqCst), 2);
}

#[test]
fn test_registry_clones_share_state() {
    let registry = ContextRegistry::new();
    let handle = registry.clone();

    let a = registry.resolve(&url("http://host")).unwrap();
    let b = handle.get(a.key()).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_global_registry_is_shared() {
    let a = ContextRegistry::global()
        .resolve(&url("http://global-registry-test.invalid"))
        .unwrap();
    let b = ContextRegistry::global()
        .resolve(&url("http://global-registry-test.invalid:80/"))
        .unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_concurrent_first_access_creates_once() {
    const THREADS: usize = 16;

    let factory = CountingFactory::default();
    let registry = ContextRegistry::with_factory(factory.clone());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.resolve(&url("http://contended:9000")).unwrap()
            })
        })
        .collect();

    let contexts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(factory.created.load(Ordering::SeqCst), 1);
    for context in &contexts {
        assert!(Arc::ptr_eq(context, &contexts[0]));
    }
}

// --- Client ---

#[tokio::test]
async fn test_client_routes_to_context_origin() {
    let transport = RecordingTransport::new();
    let registry = ContextRegistry::new();
    let client = Client::new(Arc::new(transport.clone()), Arc::new(registry.clone()));

    let request = Request::new(Method::POST, "/wildfly-services/ejb/v1/open/-/m/-/Bean");
    let response = client
        .send(&url("http://host:8080/ignored"), request)
        .await
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);

    let seen = transport.seen().await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].endpoint.as_str(), "http://host:8080/");
    assert_eq!(seen[0].request.path(), "/wildfly-services/ejb/v1/open/-/m/-/Bean");
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn test_client_tracks_session_affinity() {
    let transport = RecordingTransport::with_session_cookie("JSESSIONID=abc.node1; Path=/");
    let registry = ContextRegistry::new();
    let client = Client::new(Arc::new(transport.clone()), Arc::new(registry.clone()));
    let endpoint = url("http://host");

    client
        .send(&endpoint, Request::new(Method::POST, "/first"))
        .await
        .unwrap();
    client
        .send(&endpoint, Request::new(Method::POST, "/second"))
        .await
        .unwrap();

    let seen = transport.seen().await;
    assert!(seen[0].request.headers().get(COOKIE).is_none());
    assert_eq!(seen[1].request.headers()[COOKIE], "JSESSIONID=abc.node1");

    let context = registry.resolve(&endpoint).unwrap();
    assert_eq!(context.affinity().as_deref(), Some("abc.node1"));
}

#[tokio::test]
async fn test_client_resolution_failure_skips_transport() {
    let transport = RecordingTransport::new();
    let client = Client::new(
        Arc::new(transport.clone()),
        Arc::new(ContextRegistry::with_factory(RefusingFactory)),
    );

    let result = client
        .send(&url("http://host"), Request::new(Method::DELETE, "/x"))
        .await;

    assert!(matches!(result, Err(client::Error::Resolve(_))));
    assert!(transport.seen().await.is_empty());
}

#[tokio::test]
async fn test_client_transport_failure() {
    let client = Client::new(Arc::new(UnreachableTransport), Arc::new(ContextRegistry::new()));

    let result = client
        .send(&url("https://host"), Request::new(Method::POST, "/x"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, client::Error::Transport(_)));
    assert!(err.to_string().contains("https://host/ unreachable"));
}

#[tokio::test]
async fn test_client_rejects_unsendable_path() {
    let transport = RecordingTransport::new();
    let client = Client::new(Arc::new(transport.clone()), Arc::new(ContextRegistry::new()));

    // descriptors keep names verbatim; a space cannot appear in a request target
    let request = Request::new(Method::POST, "/ejb/v1/open/my app/-/-/Bean");
    let result = client.send(&url("http://host"), request).await;

    assert!(matches!(
        result,
        Err(client::Error::Transport(transport::Error::InvalidRequest(_)))
    ));
    assert!(transport.seen().await.is_empty());
}

#[tokio::test]
async fn test_client_with_global_registry() {
    let transport = RecordingTransport::new();
    let client = Client::with_global_registry(Arc::new(transport.clone()));
    let endpoint = url("http://global-client.invalid:9090/app");

    client
        .send(&endpoint, Request::new(Method::POST, "/x"))
        .await
        .unwrap();

    let key = EndpointKey::parse("http://global-client.invalid:9090").unwrap();
    let context = ContextRegistry::global().get(&key).expect("registered globally");
    assert_eq!(context.uri().as_str(), "http://global-client.invalid:9090/");
    assert_eq!(transport.seen().await[0].endpoint, *context.uri());
}
