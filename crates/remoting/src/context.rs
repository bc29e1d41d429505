//! # Target Context
//!
//! Endpoint-scoped state shared by every invocation directed at one remote
//! endpoint. Contexts are owned by a [`ContextRegistry`](crate::registry::ContextRegistry)
//! and handed out as `Arc<TargetContext>`.
//!
//! # Thread Safety
//!
//! A context is `Send + Sync`. The only mutable state, the session affinity
//! id, sits behind an `RwLock` that is never held across an await point.

use std::fmt;
use std::sync::PoisonError;
use std::sync::RwLock;

use http::HeaderMap;
use http::HeaderValue;
use http::header::COOKIE;
use http::header::SET_COOKIE;
use url::Url;

use crate::request::Request;

/// Cookie carrying the session affinity id.
pub const AFFINITY_COOKIE: &str = "JSESSIONID";

#[derive(Debug, Clone)]
pub enum Error {
    /// The URI could not be parsed.
    InvalidUri { uri: String, reason: url::ParseError },
    /// The URI has no host to key a context by.
    MissingHost(String),
    /// The affinity id cannot be carried in a header.
    InvalidAffinity(String),
    /// The context factory refused to provision the endpoint.
    Factory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUri { uri, reason } => write!(f, "Invalid URI '{}': {}", uri, reason),
            Self::MissingHost(uri) => write!(f, "URI has no host: {}", uri),
            Self::InvalidAffinity(id) => write!(f, "Invalid affinity id: {}", id),
            Self::Factory(msg) => write!(f, "Context factory error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Normalized endpoint identity: scheme, lowercase host, effective port.
///
/// `http://Example.com` and `http://example.com:80/some/path` share a key.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EndpointKey(String);

impl EndpointKey {
    pub fn from_url(url: &Url) -> Result<Self> {
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| Error::MissingHost(url.to_string()))?;

        let key = match url.port_or_known_default() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host.to_ascii_lowercase(), port),
            None => format!("{}://{}", url.scheme(), host.to_ascii_lowercase()),
        };
        Ok(Self(key))
    }

    pub fn parse(uri: &str) -> Result<Self> {
        Self::from_url(&parse_uri(uri)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses `uri`, mapping failures to [`Error::InvalidUri`].
pub fn parse_uri(uri: &str) -> Result<Url> {
    Url::parse(uri).map_err(|reason| Error::InvalidUri {
        uri: uri.to_string(),
        reason,
    })
}

#[derive(Debug)]
struct Affinity {
    id: String,
    cookie: HeaderValue,
}

impl Affinity {
    fn new(id: String) -> Result<Self> {
        let cookie = HeaderValue::try_from(format!("{}={}", AFFINITY_COOKIE, id))
            .map_err(|_| Error::InvalidAffinity(id.clone()))?;
        Ok(Self { id, cookie })
    }
}

/// Logical connection and session state toward one endpoint.
#[derive(Debug)]
pub struct TargetContext {
    key: EndpointKey,
    uri: Url,
    affinity: RwLock<Option<Affinity>>,
}

impl TargetContext {
    /// Creates a context addressed at the origin of `key`.
    pub fn new(key: EndpointKey) -> Result<Self> {
        let uri = parse_uri(key.as_str())?;
        Ok(Self {
            key,
            uri,
            affinity: RwLock::new(None),
        })
    }

    pub fn key(&self) -> &EndpointKey {
        &self.key
    }

    /// The normalized endpoint URI (origin only, no path).
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn scheme(&self) -> &str {
        self.uri.scheme()
    }

    pub fn affinity(&self) -> Option<String> {
        self.affinity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|affinity| affinity.id.clone())
    }

    pub fn set_affinity(&self, id: impl Into<String>) -> Result<()> {
        let affinity = Affinity::new(id.into())?;
        let mut guard = self.affinity.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(affinity);
        Ok(())
    }

    pub fn clear_affinity(&self) {
        let mut guard = self.affinity.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Adds the affinity cookie to `request`, if an affinity id is known.
    pub fn apply_affinity(&self, request: &mut Request) {
        let guard = self.affinity.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(affinity) = guard.as_ref() {
            request.headers_mut().append(COOKIE, affinity.cookie.clone());
        }
    }

    /// Records an affinity id carried by `Set-Cookie` response headers.
    ///
    /// Returns `true` if the stored id changed. The comparison and the
    /// replacement happen under one write lock.
    pub fn update_affinity(&self, headers: &HeaderMap) -> bool {
        let Some(id) = affinity_from_headers(headers) else {
            return false;
        };
        let mut guard = self.affinity.write().unwrap_or_else(PoisonError::into_inner);
        if guard.as_ref().is_some_and(|current| current.id == id) {
            return false;
        }
        match Affinity::new(id.to_string()) {
            Ok(affinity) => {
                *guard = Some(affinity);
                true
            }
            Err(_) => false,
        }
    }
}

fn affinity_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == AFFINITY_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}
