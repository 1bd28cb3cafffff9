//! Submit gating
//!
//! A gated submit control is enabled only while the form passes the
//! platform's overall validity check and no descendant control carries
//! `aria-invalid="true"`.

use fos_dom::NodeId;

use crate::host::FormHost;
use crate::sync::ARIA_INVALID;

/// Whether `node` is an element that submits its form when activated
pub fn is_submit_control<H: FormHost + ?Sized>(host: &H, node: NodeId) -> bool {
    host.control_kind(node).is_some_and(|kind| kind.submits())
}

/// Whether any descendant of `form` is explicitly marked invalid
pub fn has_invalid_marker<H: FormHost + ?Sized>(host: &H, form: NodeId) -> bool {
    host.descendants(form)
        .into_iter()
        .any(|node| host.attribute(node, ARIA_INVALID) == Some("true"))
}

/// Recompute the enabled state of `submit`; returns whether it is enabled
pub fn update_gating<H: FormHost + ?Sized>(host: &mut H, form: NodeId, submit: NodeId) -> bool {
    let enabled = host.form_is_valid(form) && !has_invalid_marker(host, form);
    if enabled {
        host.remove_attribute(submit, "disabled");
    } else {
        host.set_attribute(submit, "disabled", "");
    }
    tracing::trace!("Submit {} of form {} enabled={}", submit, form, enabled);
    enabled
}
