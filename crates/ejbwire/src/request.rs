//! # Invocation Request Assembler
//!
//! Maps an invocation kind to its verb and headers:
//!
//! | Kind | Verb | Headers |
//! |---|---|---|
//! | method invocation | `POST` | `Accept` (response or exception), `Content-Type` (invocation), invocation id if set |
//! | stateful create | `POST` | `Content-Type` (session open), `Accept` (exception) |
//! | cancel | `DELETE` | none |
//!
//! Argument values are never inspected; only the method metadata already on
//! the descriptor shows up in the request.

use http::HeaderValue;
use http::Method;
use http::header::ACCEPT;
use http::header::CONTENT_TYPE;
use remoting::Request;
use tracing::trace;

use crate::headers;
use crate::invocation::Invocation;
use crate::invocation::Operation;
use crate::path;

impl Invocation {
    /// Assembles the request descriptor for this invocation.
    ///
    /// `mount_point` is prefixed verbatim to the path. No I/O happens here.
    pub fn create_request(&self, mount_point: Option<&str>) -> Request {
        let path = path::encode_path(mount_point, self);
        trace!(kind = %self.kind(), path = %path, "assembled invocation request");

        match self.operation() {
            Operation::Invoke { invocation_id, .. } => {
                let request = Request::new(Method::POST, path)
                    .with_header(ACCEPT, HeaderValue::from_static(headers::INVOCATION_ACCEPT))
                    .with_header(
                        CONTENT_TYPE,
                        HeaderValue::from_static(headers::INVOCATION_VERSION_ONE),
                    );
                with_invocation_id(request, *invocation_id)
            }
            Operation::Open => Request::new(Method::POST, path)
                .with_header(
                    CONTENT_TYPE,
                    HeaderValue::from_static(headers::SESSION_OPEN_VERSION_ONE),
                )
                .with_header(ACCEPT, HeaderValue::from_static(headers::STATEFUL_CREATE_ACCEPT)),
            Operation::Cancel { .. } => Request::new(Method::DELETE, path),
        }
    }
}

fn with_invocation_id(request: Request, invocation_id: Option<u64>) -> Request {
    match invocation_id {
        Some(id) => request.with_header(headers::INVOCATION_ID, HeaderValue::from(id)),
        None => request,
    }
}
