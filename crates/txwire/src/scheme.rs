//! # Scheme Allow-List
//!
//! The closed set of URI schemes this transport serves. Matching is exact
//! and case-sensitive; there is no fallback.

use std::fmt;

use crate::error::Error;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Http, Scheme::Https];

    /// Returns `None` for any scheme not in the allow-list.
    pub fn parse(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl TryFrom<&str> for Scheme {
    type Error = Error;

    fn try_from(scheme: &str) -> Result<Self, Error> {
        Self::parse(scheme).ok_or_else(|| Error::UnsupportedScheme(scheme.to_string()))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
