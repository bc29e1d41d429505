//! # Client Configuration
//!
//! Settings shared by every protocol built on this crate.

use crate::path::ProtocolVersion;

/// Path prefix under which the remote services are exposed by default.
pub const DEFAULT_MOUNT_POINT: &str = "/wildfly-services";

/// Client-side protocol settings.
///
/// The protocol version is a process-level setting that seeds each
/// descriptor; descriptors may still override it per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub mount_point: Option<String>,
    pub protocol_version: ProtocolVersion,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            mount_point: Some(DEFAULT_MOUNT_POINT.to_string()),
            protocol_version: ProtocolVersion::V1,
        }
    }

    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.mount_point = Some(mount_point.into());
        self
    }

    /// Serves paths from the root, with no prefix.
    pub fn without_mount_point(mut self) -> Self {
        self.mount_point = None;
        self
    }

    pub fn with_protocol_version(mut self, version: ProtocolVersion) -> Self {
        self.protocol_version = version;
        self
    }

    pub fn mount_point(&self) -> Option<&str> {
        self.mount_point.as_deref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.mount_point(), Some("/wildfly-services"));
        assert_eq!(config.protocol_version, ProtocolVersion::V1);
    }

    #[test]
    fn test_overrides() {
        let version = ProtocolVersion::new(2).unwrap();
        let config = ClientConfig::new()
            .with_mount_point("/services")
            .with_protocol_version(version);
        assert_eq!(config.mount_point(), Some("/services"));
        assert_eq!(config.protocol_version, version);

        let config = config.without_mount_point();
        assert_eq!(config.mount_point(), None);
    }
}
