//! # Error Definitions
//!
//! Construction failures. All are caller contract violations, reported
//! before any request exists; none are retried.

/// A descriptor that cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field required by the selected invocation kind was not set.
    MissingField(&'static str),
    /// The protocol version must be positive.
    InvalidVersion(u32),
    /// A method signature could not be parsed.
    InvalidSignature(String),
    /// A path component contains the `/` separator.
    InvalidSegment { field: &'static str, value: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field: {}", field),
            Self::InvalidVersion(v) => write!(f, "Invalid protocol version: {}", v),
            Self::InvalidSignature(s) => write!(f, "Invalid method signature: {}", s),
            Self::InvalidSegment { field, value } => {
                write!(f, "Invalid {} '{}': must not contain '/'", field, value)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A specialized Result type for descriptor construction.
pub type Result<T> = std::result::Result<T, Error>;
