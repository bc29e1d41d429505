//! Media types and header names of the transaction protocol.

use http::HeaderName;

/// Reply to a begin: the new transaction's identity.
pub const NEW_TRANSACTION: &str = "application/x-wf-jbmar-new-txn;version=1";

/// Body carrying a marshalled transaction id.
pub const XID: &str = "application/x-wf-txn-jbmar-xid;version=1";

/// Reply to a recover scan: a list of transaction ids.
pub const XID_LIST: &str = "application/x-wf-txn-jbmar-xid-list;version=1";

/// Marshalled remote exception.
pub const EXCEPTION: &str = "application/x-wf-jbmar-exception;version=1";

/// Transaction timeout in seconds.
pub const TIMEOUT: HeaderName = HeaderName::from_static("timeout");

/// Recovery scan flags, as a decimal integer.
pub const RECOVERY_FLAGS: HeaderName = HeaderName::from_static("x-wf-txn-recovery-flags");

/// Node name of the coordinator running a recovery scan.
pub const PARENT_NAME: HeaderName = HeaderName::from_static("x-wf-txn-parent-name");
