//! # EJB Wire
//!
//! Canonical encoding of remote bean calls for the HTTP remoting protocol.
//!
//! An [`Invocation`] names a bean, what to do with it (invoke a method, open
//! a stateful session, cancel a running invocation) and the protocol
//! version. [`Invocation::create_request`] turns it into a [`Request`]
//! descriptor: verb, canonical path and headers.
//!
//! ## Path grammar
//!
//! ```text
//! [mount]/ejb/v<version>/<invoke|open|cancel>/<app|->/<module|->/<distinct|->/<bean>[/<suffix>]
//! ```

pub mod error;
pub mod headers;
pub mod invocation;
pub mod path;
pub mod request;
pub mod signature;

pub use error::Error;
pub use error::Result;
pub use invocation::BeanLocator;
pub use invocation::Invocation;
pub use invocation::InvocationBuilder;
pub use invocation::InvocationKind;
pub use invocation::Operation;
pub use remoting::Request;
pub use signature::MethodSignature;
