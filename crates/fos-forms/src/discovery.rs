//! Form and control discovery
//!
//! Finds opted-in forms and, per form, the controls and submit elements
//! that the engine wires.

use fos_dom::NodeId;

use crate::config::Config;
use crate::host::FormHost;
use crate::resolver::has_validation_attrs;

/// Tags that can be validated
const CONTROL_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// Opted-in forms at or below `root`, in document order
pub fn find_forms<H: FormHost + ?Sized>(host: &H, config: &Config, root: NodeId) -> Vec<NodeId> {
    std::iter::once(root)
        .chain(host.descendants(root))
        .filter(|&node| {
            host.tag_name(node) == Some("form") && host.has_attribute(node, &config.form_marker)
        })
        .collect()
}

/// Whether `node` should get a validation listener
///
/// Requires a validatable tag, no opt-out flag, and at least one native
/// validation attribute or a confirm reference.
pub fn is_eligible<H: FormHost + ?Sized>(host: &H, config: &Config, node: NodeId) -> bool {
    let Some(tag) = host.tag_name(node) else {
        return false;
    };
    CONTROL_TAGS.contains(&tag)
        && !host.has_attribute(node, &config.opt_out)
        && (has_validation_attrs(host, node) || host.has_attribute(node, &config.confirm_ref))
}

/// Eligible controls of a form
pub fn eligible_controls<H: FormHost + ?Sized>(host: &H, config: &Config, form: NodeId) -> Vec<NodeId> {
    host.descendants(form)
        .into_iter()
        .filter(|&node| is_eligible(host, config, node))
        .collect()
}

/// Elements of a form flagged for submit gating, valid or not
pub fn gated_submit_candidates<H: FormHost + ?Sized>(host: &H, config: &Config, form: NodeId) -> Vec<NodeId> {
    host.descendants(form)
        .into_iter()
        .filter(|&node| host.has_attribute(node, &config.submit_marker))
        .collect()
}
