//! Decision synchronization
//!
//! Writes a [`Decision`] into the document: `aria-invalid` on the control,
//! plus state classes and text on its message target. Applying the same
//! decision twice leaves the document unchanged.

use fos_dom::NodeId;

use crate::config::Config;
use crate::host::FormHost;
use crate::resolver::{Decision, ValidationState};

/// Accessibility attribute carrying the invalid marker
pub const ARIA_INVALID: &str = "aria-invalid";

/// Apply `decision` to `control` and its optional message target
pub fn apply<H: FormHost + ?Sized>(
    host: &mut H,
    config: &Config,
    control: NodeId,
    message_target: Option<NodeId>,
    decision: &Decision,
) {
    tracing::trace!("Sync {} -> {:?}", control, decision.state);

    match decision.state {
        ValidationState::Invalid => host.set_attribute(control, ARIA_INVALID, "true"),
        ValidationState::Valid => host.set_attribute(control, ARIA_INVALID, "false"),
        // Absent, not "false": the control has not been evaluated
        ValidationState::Neutral => host.remove_attribute(control, ARIA_INVALID),
    }

    let Some(target) = message_target else {
        return;
    };

    let state = decision.state;
    toggle_class(host, target, &config.valid_class, state == ValidationState::Valid);
    toggle_class(host, target, &config.invalid_class, state == ValidationState::Invalid);
    // Unchanged text keeps its text node
    if host.text(target) != decision.message {
        host.set_text(target, &decision.message);
    }
}

fn toggle_class<H: FormHost + ?Sized>(host: &mut H, node: NodeId, class: &str, on: bool) {
    if host.has_class(node, class) == on {
        return;
    }
    if on {
        host.add_class(node, class);
    } else {
        host.remove_class(node, class);
    }
}

/// State currently displayed by a control, read back from `aria-invalid`
pub fn displayed_state<H: FormHost + ?Sized>(host: &H, control: NodeId) -> ValidationState {
    match host.attribute(control, ARIA_INVALID) {
        Some("true") => ValidationState::Invalid,
        Some(_) => ValidationState::Valid,
        None => ValidationState::Neutral,
    }
}
