//! # Error Definitions

use remoting::context;

#[derive(Debug, Clone)]
pub enum Error {
    /// The URI scheme is not served by this transport. No resolution was attempted.
    UnsupportedScheme(String),
    /// The target context could not be resolved.
    Resolution(context::Error),
    /// The recovery parent name cannot travel as a header value.
    InvalidParentName(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedScheme(scheme) => write!(f, "Unsupported scheme: {}", scheme),
            Self::Resolution(e) => write!(f, "Resolution error: {}", e),
            Self::InvalidParentName(name) => write!(f, "Invalid parent name: {:?}", name),
        }
    }
}

impl std::error::Error for Error {}

impl From<context::Error> for Error {
    fn from(e: context::Error) -> Self {
        Self::Resolution(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
