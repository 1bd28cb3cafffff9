//! Validation state resolution
//!
//! Maps a control's validity vector and declared attributes to a
//! [`Decision`]. Resolution reads the host and never mutates it.
//!
//! Precedence:
//! 1. file accept filter (file controls with a non-empty value),
//! 2. confirm relation (controls with a confirm origin never reach step 3),
//! 3. the platform flags in [`ValidityKind::NATIVE_PRIORITY`] order.

use fos_dom::NodeId;

use crate::accept::AcceptFilter;
use crate::error::ConfigWarning;
use crate::host::FormHost;
use crate::kind::{SUCCESS_ATTR, ValidityKind};

/// Native attributes that make a control eligible for validation
pub const NATIVE_VALIDATION_ATTRS: [&str; 8] = [
    "accept", "min", "max", "step", "minlength", "maxlength", "pattern", "required",
];

/// Control lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationState {
    /// Not yet meaningfully evaluated (empty and not failing)
    Neutral,
    Valid,
    Invalid,
}

/// Outcome of resolving one control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub state: ValidationState,
    /// Error text when invalid, success text when valid, empty when neutral
    pub message: String,
    /// The failing kind, for invalid decisions
    pub kind: Option<ValidityKind>,
}

impl Decision {
    pub fn neutral() -> Self {
        Self { state: ValidationState::Neutral, message: String::new(), kind: None }
    }

    pub fn valid(message: impl Into<String>) -> Self {
        Self { state: ValidationState::Valid, message: message.into(), kind: None }
    }

    pub fn invalid(kind: ValidityKind, message: impl Into<String>) -> Self {
        Self { state: ValidationState::Invalid, message: message.into(), kind: Some(kind) }
    }

    pub fn is_invalid(&self) -> bool {
        self.state == ValidationState::Invalid
    }
}

/// Confirm relation from a dependent control to its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRelation {
    /// Selector as written in the markup
    pub selector: String,
    /// Origin resolved at registration; `None` if the selector found nothing
    pub origin: Option<NodeId>,
}

impl ConfirmRelation {
    /// Read and resolve the confirm reference of `control`; `None` without one
    pub fn lookup<H: FormHost + ?Sized>(host: &H, control: NodeId, attribute: &str) -> Option<Self> {
        let selector = host.attribute(control, attribute)?.trim().to_string();
        let origin = if selector.is_empty() { None } else { host.query_selector(&selector) };
        Some(Self { selector, origin })
    }
}

/// Whether `control` declares any attribute the resolver acts on
pub fn has_validation_attrs<H: FormHost + ?Sized>(host: &H, control: NodeId) -> bool {
    NATIVE_VALIDATION_ATTRS.iter().any(|attr| host.has_attribute(control, attr))
}

/// Resolve the decision for `control`
///
/// Fails only when the control has a confirm relation whose origin does not
/// exist; the caller is expected to leave the control's displayed state alone.
pub fn resolve<H: FormHost + ?Sized>(
    host: &H,
    control: NodeId,
    confirm: Option<&ConfirmRelation>,
) -> Result<Decision, ConfigWarning> {
    if confirm.is_none() && !has_validation_attrs(host, control) {
        return Ok(Decision::neutral());
    }

    let value = host.value(control);
    let trimmed = value.trim();

    if let Some(decision) = resolve_accept(host, control, trimmed) {
        return Ok(decision);
    }

    if let Some(relation) = confirm {
        return resolve_confirm(host, control, relation, trimmed);
    }

    let validity = host.validity(control);
    Ok(match ValidityKind::first_flagged(&validity) {
        Some(kind) => Decision::invalid(kind, kind.message(host, control)),
        None if trimmed.is_empty() => Decision::neutral(),
        None => Decision::valid(success_message(host, control)),
    })
}

/// Invalid decision if a file control holds a file its accept filter rejects
fn resolve_accept<H: FormHost + ?Sized>(host: &H, control: NodeId, trimmed: &str) -> Option<Decision> {
    if trimmed.is_empty() || !host.control_kind(control).is_some_and(|k| k.is_file()) {
        return None;
    }
    let filter = AcceptFilter::parse(host.attribute(control, "accept")?)?;
    if filter.accepts_all(host.files(control)) {
        return None;
    }
    let kind = ValidityKind::FileAccept;
    Some(Decision::invalid(kind, kind.message(host, control)))
}

fn resolve_confirm<H: FormHost + ?Sized>(
    host: &H,
    control: NodeId,
    relation: &ConfirmRelation,
    trimmed: &str,
) -> Result<Decision, ConfigWarning> {
    let Some(origin) = relation.origin else {
        return Err(ConfigWarning::MissingConfirmOrigin {
            control,
            selector: relation.selector.clone(),
        });
    };

    if trimmed.is_empty() {
        return Ok(Decision::neutral());
    }
    if trimmed != host.value(origin) {
        let kind = ValidityKind::ConfirmMismatch;
        return Ok(Decision::invalid(kind, kind.message(host, control)));
    }
    Ok(Decision::valid(success_message(host, control)))
}

fn success_message<H: FormHost + ?Sized>(host: &H, control: NodeId) -> String {
    host.attribute(control, SUCCESS_ATTR).unwrap_or_default().to_string()
}
