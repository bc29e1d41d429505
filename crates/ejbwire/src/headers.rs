//! Media types and header names agreed on with the server.
//!
//! Compared case-sensitively on both ends.

use http::HeaderName;

/// Content type of a method invocation body.
pub const INVOCATION_VERSION_ONE: &str = "application/x-wf-ejb-invocation;version=1";

/// Content type of a stateful session open body.
pub const SESSION_OPEN_VERSION_ONE: &str = "application/x-wf-jbmar-sess-open;version=1";

/// Successful method response.
pub const EJB_RESPONSE_VERSION_ONE: &str = "application/x-wf-ejb-response;version=1";

/// Marshalled remote exception.
pub const EXCEPTION_VERSION_ONE: &str = "application/x-wf-jbmar-exception;version=1";

/// `Accept` for a method invocation: a result or an exception.
pub const INVOCATION_ACCEPT: &str =
    "application/x-wf-ejb-response;version=1,application/x-wf-jbmar-exception;version=1";

/// `Accept` for a session open: only failures carry a body.
pub const STATEFUL_CREATE_ACCEPT: &str = EXCEPTION_VERSION_ONE;

/// Correlates an invocation with a later cancel.
pub const INVOCATION_ID: HeaderName = HeaderName::from_static("x-wf-invocation-id");
