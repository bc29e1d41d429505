//! # Path Segments
//!
//! Canonical request paths are an ordered list of segments joined by `/`.
//! Optional identity components that are absent render as a placeholder, so
//! segment count and position stay stable for the router on the other end.
//!
//! No segment is percent-encoded here. That belongs to the URI layer of the
//! transport consuming the path.

use std::borrow::Cow;
use std::fmt;

/// Rendered in place of an absent or empty optional component.
pub const PLACEHOLDER: &str = "-";

/// Protocol version embedded in a path as `v<n>`.
///
/// Always positive. A path carries exactly one version.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProtocolVersion(u32);

impl ProtocolVersion {
    pub const V1: ProtocolVersion = ProtocolVersion(1);

    /// Returns `None` for zero.
    pub const fn new(version: u32) -> Option<Self> {
        if version == 0 {
            None
        } else {
            Some(Self(version))
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The `v<n>` path segment, rendered without padding.
    pub fn segment(self) -> String {
        format!("v{}", self.0)
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::V1
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One `/`-separated component of a request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Emitted verbatim.
    Fixed(Cow<'a, str>),
    /// Emitted verbatim when present and non-empty, otherwise as [`PLACEHOLDER`].
    Optional(Option<&'a str>),
}

impl<'a> Segment<'a> {
    pub fn fixed(value: impl Into<Cow<'a, str>>) -> Self {
        Self::Fixed(value.into())
    }

    pub fn optional(value: Option<&'a str>) -> Self {
        Self::Optional(value)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Fixed(value) => value.as_ref(),
            Self::Optional(value) => present_or_placeholder(*value),
        }
    }
}

/// The single substitution rule for optional components.
pub fn present_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => PLACEHOLDER,
    }
}

/// The `<service>/v<version>` head shared by every protocol path.
pub fn service_prefix(service: &'static str, version: ProtocolVersion) -> [Segment<'static>; 2] {
    [Segment::fixed(service), Segment::fixed(version.segment())]
}

/// Joins `segments` under `mount_point`.
///
/// The mount point is emitted as given. It is expected to be normalized
/// already (leading slash, no trailing slash); nothing is added or stripped.
pub fn encode_path(mount_point: Option<&str>, segments: &[Segment<'_>]) -> String {
    let capacity = mount_point.map_or(0, str::len)
        + segments.iter().map(|s| s.as_str().len() + 1).sum::<usize>();

    let mut path = String::with_capacity(capacity);
    if let Some(mount_point) = mount_point {
        path.push_str(mount_point);
    }
    for segment in segments {
        path.push('/');
        path.push_str(segment.as_str());
    }
    path
}
