//! # Remoting
//!
//! Shared plumbing for the HTTP remoting protocols: canonical path segments,
//! request descriptors, client configuration, endpoint-scoped target
//! contexts and the transport boundary.

pub mod client;
pub mod config;
pub mod context;
pub mod path;
pub mod registry;
pub mod request;
pub mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use context::EndpointKey;
pub use context::TargetContext;
pub use path::ProtocolVersion;
pub use path::Segment;
pub use registry::ContextFactory;
pub use registry::ContextRegistry;
pub use registry::TargetContextResolver;
pub use request::Request;
pub use transport::Transport;

#[cfg(test)]
mod mock_transport;

#[cfg(test)]
mod tests;
