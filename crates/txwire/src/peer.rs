//! # Transaction Peer
//!
//! Handle a transaction coordinator uses to address the remote participant
//! bound to one endpoint. The peer holds a shared reference to the target
//! context; the registry owns the context's lifecycle.
//!
//! Request paths live under `[mount]/txn/v<version>/`:
//!
//! ```text
//! ut/begin    ut/commit    ut/rollback    xa/recover/<parent|->
//! ```

use std::sync::Arc;

use http::HeaderValue;
use http::Method;
use http::header::ACCEPT;
use http::header::CONTENT_TYPE;
use remoting::ProtocolVersion;
use remoting::Request;
use remoting::TargetContext;
use remoting::path;
use remoting::path::Segment;
use url::Url;

use crate::error::Error;
use crate::error::Result;
use crate::headers;
use crate::scheme::Scheme;

/// Fixed service segment heading every transaction path.
pub const SERVICE: &str = "txn";

#[derive(Clone, Debug)]
pub struct TransactionPeer {
    scheme: Scheme,
    context: Arc<TargetContext>,
    mount_point: Option<String>,
    version: ProtocolVersion,
}

impl TransactionPeer {
    pub(crate) fn new(
        scheme: Scheme,
        context: Arc<TargetContext>,
        mount_point: Option<String>,
        version: ProtocolVersion,
    ) -> Self {
        Self {
            scheme,
            context,
            mount_point,
            version,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn context(&self) -> &Arc<TargetContext> {
        &self.context
    }

    /// Endpoint the peer's requests are sent to.
    pub fn uri(&self) -> &Url {
        self.context.uri()
    }

    /// Two handles address the same participant iff they share a context.
    pub fn is_same_peer(&self, other: &TransactionPeer) -> bool {
        Arc::ptr_eq(&self.context, &other.context)
    }

    /// Enlists the remote side in a new transaction.
    pub fn begin_request(&self, timeout_secs: u32) -> Request {
        Request::new(Method::POST, self.path(&["ut", "begin"]))
            .with_header(ACCEPT, HeaderValue::from_static(headers::NEW_TRANSACTION))
            .with_header(ACCEPT, HeaderValue::from_static(headers::EXCEPTION))
            .with_header(headers::TIMEOUT, HeaderValue::from(timeout_secs))
    }

    /// Commits the transaction whose id travels in the body.
    pub fn commit_request(&self) -> Request {
        self.completion_request("commit")
    }

    /// Rolls back the transaction whose id travels in the body.
    pub fn rollback_request(&self) -> Request {
        self.completion_request("rollback")
    }

    /// Scans the remote side for in-doubt transactions on behalf of `parent_name`.
    ///
    /// A named parent appears both as the last path segment and in the
    /// parent-name header; an anonymous scan sends the placeholder and no header.
    pub fn recover_request(&self, parent_name: Option<&str>, flags: i32) -> Result<Request> {
        let parent_name = parent_name.filter(|name| !name.is_empty());
        let segments = [
            Segment::fixed("xa"),
            Segment::fixed("recover"),
            Segment::optional(parent_name),
        ];
        let request = Request::new(Method::GET, self.encode(&segments))
            .with_header(ACCEPT, HeaderValue::from_static(headers::XID_LIST))
            .with_header(ACCEPT, HeaderValue::from_static(headers::EXCEPTION))
            .with_header(headers::RECOVERY_FLAGS, HeaderValue::from(flags));

        match parent_name {
            Some(name) => {
                let value = HeaderValue::from_str(name)
                    .map_err(|_| Error::InvalidParentName(name.to_string()))?;
                Ok(request.with_header(headers::PARENT_NAME, value))
            }
            None => Ok(request),
        }
    }

    fn completion_request(&self, action: &'static str) -> Request {
        Request::new(Method::POST, self.path(&["ut", action]))
            .with_header(CONTENT_TYPE, HeaderValue::from_static(headers::XID))
            .with_header(ACCEPT, HeaderValue::from_static(headers::EXCEPTION))
    }

    fn path(&self, tail: &[&'static str]) -> String {
        let segments: Vec<Segment<'_>> = tail.iter().map(|s| Segment::fixed(*s)).collect();
        self.encode(&segments)
    }

    fn encode(&self, tail: &[Segment<'_>]) -> String {
        let mut segments: Vec<Segment<'_>> = Vec::with_capacity(tail.len() + 2);
        segments.extend(path::service_prefix(SERVICE, self.version));
        segments.extend_from_slice(tail);
        path::encode_path(self.mount_point.as_deref(), &segments)
    }
}
