//! # Identity Encoder
//!
//! Turns an [`Invocation`] into its canonical path. Pure; the same
//! descriptor always encodes to the same bytes.

use remoting::path;
use remoting::path::Segment;

use crate::invocation::Invocation;
use crate::invocation::Operation;

/// Fixed service segment heading every bean path.
pub const SERVICE: &str = "ejb";

/// Segments after the mount point, in wire order.
///
/// `ejb`, `v<n>`, kind tag, app, module, distinct, bean, then the suffix of
/// the kind. Absent app, module, distinct and session id are placeholders.
pub fn segments(invocation: &Invocation) -> Vec<Segment<'_>> {
    let mut segments = Vec::with_capacity(12);
    segments.extend(path::service_prefix(SERVICE, invocation.version()));
    segments.push(Segment::fixed(invocation.kind().tag()));
    segments.push(Segment::optional(invocation.app_name()));
    segments.push(Segment::optional(invocation.module_name()));
    segments.push(Segment::optional(invocation.distinct_name()));
    segments.push(Segment::fixed(invocation.bean_name()));

    match invocation.operation() {
        Operation::Invoke {
            session_id,
            view,
            method,
            ..
        } => {
            segments.push(Segment::optional(session_id.as_deref()));
            segments.push(Segment::fixed(view.as_str()));
            segments.push(Segment::fixed(method.name()));
            segments.extend(
                method
                    .parameter_types()
                    .iter()
                    .map(|ty| Segment::fixed(ty.as_str())),
            );
        }
        Operation::Open => {}
        Operation::Cancel {
            cancel_if_running, ..
        } => {
            if let Some(flag) = cancel_if_running {
                segments.push(Segment::fixed(if *flag { "true" } else { "false" }));
            }
        }
    }
    segments
}

/// Encodes the full request path for `invocation` under `mount_point`.
pub fn encode_path(mount_point: Option<&str>, invocation: &Invocation) -> String {
    path::encode_path(mount_point, &segments(invocation))
}
