//! Validation engine
//!
//! Owns the registration set, the per-control bindings and the listener
//! table. One engine is created per document and lives as long as it;
//! registrations are never removed.
//!
//! Event handling is synchronous: [`ValidationEngine::dispatch`] runs every
//! listener on the event path to completion before returning, target first,
//! then each ancestor (so a control re-resolves before its form re-gates).

use std::collections::{HashMap, HashSet};

use fos_dom::{DomEvent, DomEventType, NodeId};

use crate::config::Config;
use crate::discovery;
use crate::error::ConfigWarning;
use crate::gating;
use crate::host::FormHost;
use crate::resolver::{self, ConfirmRelation, Decision};
use crate::sync;

/// Relations of a wired control, resolved once at registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBinding {
    pub control: NodeId,
    pub form: NodeId,
    /// Element receiving message text and state classes
    pub message_target: Option<NodeId>,
    /// Control whose value this one must equal
    pub confirm: Option<ConfirmRelation>,
}

/// Work attached to a node, run when a value-changing event passes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// Resolve and sync a control
    Validate(NodeId),
    /// Recompute the enabled state of a gated submit control
    Gate { form: NodeId, submit: NodeId },
}

/// Outcome of registering one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReport {
    pub form: NodeId,
    /// The form was registered before; nothing was wired
    pub already_registered: bool,
    /// Controls that received a validation listener
    pub controls: Vec<NodeId>,
    /// Submit controls now under gating
    pub gated_submits: Vec<NodeId>,
    /// Configuration problems found while wiring
    pub warnings: Vec<ConfigWarning>,
}

impl RegistrationReport {
    fn new(form: NodeId) -> Self {
        Self {
            form,
            already_registered: false,
            controls: Vec::new(),
            gated_submits: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Validation engine for one document
#[derive(Debug, Default)]
pub struct ValidationEngine {
    config: Config,
    forms: HashSet<NodeId>,
    bindings: HashMap<NodeId, ControlBinding>,
    listeners: HashMap<NodeId, Vec<Listener>>,
}

impl ValidationEngine {
    /// Create an engine with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether `form` is in the registration set
    pub fn is_registered(&self, form: NodeId) -> bool {
        self.forms.contains(&form)
    }

    /// Number of registered forms
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    /// Binding of a wired control
    pub fn binding(&self, control: NodeId) -> Option<&ControlBinding> {
        self.bindings.get(&control)
    }

    /// Listeners attached to `node`
    pub fn listeners(&self, node: NodeId) -> &[Listener] {
        self.listeners.get(&node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of listeners attached to `node`
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners(node).len()
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register every opted-in form in the document
    pub fn discover<H: FormHost + ?Sized>(&mut self, host: &mut H) -> Vec<RegistrationReport> {
        self.discover_within(host, NodeId::ROOT)
    }

    /// Register every opted-in form at or below `root`
    pub fn discover_within<H: FormHost + ?Sized>(&mut self, host: &mut H, root: NodeId) -> Vec<RegistrationReport> {
        let forms = discovery::find_forms(host, &self.config, root);
        tracing::debug!("Discovered {} form(s) under {}", forms.len(), root);
        forms.into_iter()
            .map(|form| self.register_form(host, form))
            .collect()
    }

    /// Wire one form; a form already registered is skipped entirely
    pub fn register_form<H: FormHost + ?Sized>(&mut self, host: &mut H, form: NodeId) -> RegistrationReport {
        let mut report = RegistrationReport::new(form);

        if !self.forms.insert(form) {
            tracing::debug!("Form {} already registered", form);
            report.already_registered = true;
            return report;
        }

        // Confirm origins whose events never bubble through this form
        let mut outside_origins = Vec::new();
        for control in discovery::eligible_controls(host, &self.config, form) {
            if let Some(origin) = self.wire_control(host, form, control, &mut report.warnings) {
                if !outside_origins.contains(&origin) {
                    outside_origins.push(origin);
                }
            }
            report.controls.push(control);
        }

        for candidate in discovery::gated_submit_candidates(host, &self.config, form) {
            if !gating::is_submit_control(host, candidate) {
                let tag = host.tag_name(candidate).unwrap_or_default().to_string();
                warn(&mut report.warnings, ConfigWarning::InvalidSubmitControl { control: candidate, tag });
                continue;
            }
            self.attach(form, Listener::Gate { form, submit: candidate });
            for &origin in &outside_origins {
                self.attach(origin, Listener::Gate { form, submit: candidate });
            }
            gating::update_gating(host, form, candidate);
            report.gated_submits.push(candidate);
        }

        tracing::debug!(
            "Registered form {}: {} control(s), {} gated submit(s), {} warning(s)",
            form,
            report.controls.len(),
            report.gated_submits.len(),
            report.warnings.len(),
        );
        report
    }

    /// Attach listeners for one control; returns its confirm origin when
    /// that origin lies outside `form`
    fn wire_control<H: FormHost + ?Sized>(
        &mut self,
        host: &H,
        form: NodeId,
        control: NodeId,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Option<NodeId> {
        let message_target = self.lookup_message_target(host, control, warnings);

        let confirm = ConfirmRelation::lookup(host, control, &self.config.confirm_ref);
        let mut outside_origin = None;
        if let Some(relation) = &confirm {
            match relation.origin {
                Some(origin) if origin != control => {
                    self.attach(origin, Listener::Validate(control));
                    if !host.ancestors(origin).contains(&form) {
                        outside_origin = Some(origin);
                    }
                }
                Some(_) => {}
                None if relation.selector.is_empty() => warn(warnings, ConfigWarning::EmptyReference {
                    control,
                    attribute: self.config.confirm_ref.clone(),
                }),
                None => warn(warnings, ConfigWarning::MissingConfirmOrigin {
                    control,
                    selector: relation.selector.clone(),
                }),
            }
        }

        self.attach(control, Listener::Validate(control));
        self.bindings.insert(control, ControlBinding { control, form, message_target, confirm });
        outside_origin
    }

    fn lookup_message_target<H: FormHost + ?Sized>(
        &self,
        host: &H,
        control: NodeId,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Option<NodeId> {
        let reference = host.attribute(control, &self.config.message_ref)?;
        let Some(id) = reference.split_whitespace().next() else {
            warn(warnings, ConfigWarning::EmptyReference {
                control,
                attribute: self.config.message_ref.clone(),
            });
            return None;
        };
        let target = host.element_by_id(id);
        if target.is_none() {
            warn(warnings, ConfigWarning::MissingMessageTarget { control, reference: id.to_string() });
        }
        target
    }

    fn attach(&mut self, node: NodeId, listener: Listener) {
        self.listeners.entry(node).or_default().push(listener);
    }

    // ------------------------------------------------------------------
    // Event handling
    // ------------------------------------------------------------------

    /// Handle one DOM event; returns the number of listeners run
    pub fn dispatch<H: FormHost + ?Sized>(&mut self, host: &mut H, event: &DomEvent) -> usize {
        if event.event_type == DomEventType::NodeInserted {
            self.discover_within(host, event.target);
            return 0;
        }
        if !event.event_type.changes_value() {
            return 0;
        }

        let mut path = vec![event.target];
        if event.bubbles {
            path.extend(host.ancestors(event.target));
        }

        let mut ran = 0;
        for node in path {
            for &listener in self.listeners(node) {
                self.run(host, listener);
                ran += 1;
            }
        }
        ran
    }

    fn run<H: FormHost + ?Sized>(&self, host: &mut H, listener: Listener) {
        match listener {
            Listener::Validate(control) => {
                self.validate(host, control);
            }
            Listener::Gate { form, submit } => {
                gating::update_gating(host, form, submit);
            }
        }
    }

    /// Resolve and sync one wired control
    ///
    /// Returns the applied decision, or `None` when the control is not wired,
    /// has opted out since registration, or its confirm origin is missing (in
    /// which case its displayed state is left as it was).
    pub fn validate<H: FormHost + ?Sized>(&self, host: &mut H, control: NodeId) -> Option<Decision> {
        let binding = self.bindings.get(&control)?;
        if host.has_attribute(control, &self.config.opt_out) {
            return None;
        }

        match resolver::resolve(host, control, binding.confirm.as_ref()) {
            Ok(decision) => {
                sync::apply(host, &self.config, control, binding.message_target, &decision);
                Some(decision)
            }
            Err(warning) => {
                tracing::warn!("{}", warning);
                None
            }
        }
    }
}

fn warn(warnings: &mut Vec<ConfigWarning>, warning: ConfigWarning) {
    tracing::warn!("{}", warning);
    warnings.push(warning);
}
