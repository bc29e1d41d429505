//! # Transaction Wire
//!
//! Binds remote endpoints to transaction peers for distributed transaction
//! propagation over the HTTP remoting protocol.
//!
//! [`TransactionProvider::get_peer_handle`] accepts only `http` and `https`
//! URIs, resolves the endpoint's target context and wraps it in a
//! [`TransactionPeer`]. The peer builds the request descriptors a
//! transaction coordinator sends to the remote side.

pub mod error;
pub mod headers;
pub mod peer;
pub mod provider;
pub mod scheme;

pub use error::Error;
pub use error::Result;
pub use peer::TransactionPeer;
pub use provider::TransactionProvider;
pub use scheme::Scheme;
