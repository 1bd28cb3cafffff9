//! Document - High-level document API
//!
//! Element access, attribute and class mutation, queries and the form
//! control runtime state (values, files, validity).

use crate::forms::{ControlKind, InputType, SelectedFile, ValidationConstraints, ValidityState};
use crate::query::Selector;
use crate::{DomTree, ElementData, Node, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate the <html> and <body> elements after the tree was built externally
    pub fn finalize(&mut self) {
        self.html_element = self.tree.children(NodeId::ROOT)
            .find(|&id| self.tag_name(id) == Some("html"))
            .unwrap_or(NodeId::NONE);
        self.body_element = self.tree.children(self.html_element)
            .find(|&id| self.tag_name(id) == Some("body"))
            .unwrap_or(NodeId::NONE);
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a detached element with attributes
    pub fn create_element(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.tree.create_element(tag);
        if let Some(elem) = self.element_mut(id) {
            for (name, value) in attrs {
                elem.set_attr(name, value);
            }
        }
        id
    }

    /// Append a child node
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.append_child(parent, child);
    }

    // ------------------------------------------------------------------
    // Elements and attributes
    // ------------------------------------------------------------------

    /// Element data of a node
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.get(id).and_then(Node::as_element)
    }

    /// Mutable element data of a node
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.tree.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Lowercase tag name
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.set_attr(name, value);
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.remove_attr(name);
        }
    }

    /// Check class membership
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.classes.contains(class))
    }

    /// Add a class, keeping the `class` attribute in sync
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(elem) = self.element_mut(id) {
            if elem.classes.add(&[class]) {
                elem.sync_class_attr();
            }
        }
    }

    /// Remove a class, keeping the `class` attribute in sync
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(elem) = self.element_mut(id) {
            if elem.classes.remove(&[class]) {
                elem.sync_class_attr();
            }
        }
    }

    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    pub fn set_text_content(&mut self, id: NodeId, content: &str) {
        self.tree.set_text_content(id, content);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Get connected element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree.descendants(NodeId::ROOT)
            .find(|&node| self.element(node).and_then(ElementData::id) == Some(id))
    }

    /// First element in the document matching `selector`
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all_within(NodeId::ROOT, selector).into_iter().next()
    }

    /// All elements in the document matching `selector`
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.query_selector_all_within(NodeId::ROOT, selector)
    }

    /// All descendants of `root` matching `selector`, in document order
    pub fn query_selector_all_within(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.tree.descendants(root)
            .filter(|&id| self.element(id).is_some_and(|e| selector.matches(e)))
            .collect()
    }

    /// Nearest ancestor `<form>` element
    pub fn closest_form(&self, id: NodeId) -> Option<NodeId> {
        self.tree.ancestors(id).find(|&a| self.tag_name(a) == Some("form"))
    }

    // ------------------------------------------------------------------
    // Form controls
    // ------------------------------------------------------------------

    /// Classify a form-associated element
    pub fn control_kind(&self, id: NodeId) -> Option<ControlKind> {
        let elem = self.element(id)?;
        ControlKind::classify(&elem.tag, elem.get_attr("type"))
    }

    /// Current value of a control
    pub fn value(&self, id: NodeId) -> String {
        let Some(elem) = self.element(id) else {
            return String::new();
        };
        if let Some(state) = &elem.control {
            if self.control_kind(id).is_some_and(|k| k.is_file()) {
                return state.files.first()
                    .map(|first| format!("C:\\fakepath\\{}", first.name))
                    .unwrap_or_default();
            }
            if let Some(value) = &state.value {
                return value.clone();
            }
        }
        match elem.tag.as_str() {
            "textarea" => self.text_content(id),
            "select" => self.default_select_value(id),
            _ => elem.get_attr("value").unwrap_or_default().to_string(),
        }
    }

    fn default_select_value(&self, select: NodeId) -> String {
        let options: Vec<NodeId> = self.tree.descendants(select)
            .filter(|&id| self.tag_name(id) == Some("option"))
            .collect();
        let chosen = options.iter()
            .copied()
            .find(|&id| self.has_attribute(id, "selected"))
            .or_else(|| options.first().copied());
        match chosen {
            Some(option) => match self.get_attribute(option, "value") {
                Some(v) => v.to_string(),
                None => self.text_content(option).trim().to_string(),
            },
            None => String::new(),
        }
    }

    /// Set the value as a user edit would
    pub fn set_value(&mut self, id: NodeId, value: &str) {
        if let Some(state) = self.element_mut(id).and_then(|e| e.control.as_mut()) {
            state.value = Some(value.to_string());
        }
    }

    /// Files selected in a file input
    pub fn files(&self, id: NodeId) -> &[SelectedFile] {
        self.element(id)
            .and_then(|e| e.control.as_ref())
            .map(|s| s.files.as_slice())
            .unwrap_or_default()
    }

    /// Replace the file selection of a file input
    pub fn set_files(&mut self, id: NodeId, files: Vec<SelectedFile>) {
        if self.control_kind(id).is_some_and(|k| k.is_file()) {
            if let Some(state) = self.element_mut(id).and_then(|e| e.control.as_mut()) {
                state.files = files;
            }
        }
    }

    /// Install (or clear with `None`) a host-provided validity vector
    pub fn set_validity_override(&mut self, id: NodeId, validity: Option<ValidityState>) {
        if let Some(state) = self.element_mut(id).and_then(|e| e.control.as_mut()) {
            state.validity_override = validity;
        }
    }

    /// Validity vector of a control
    pub fn validity(&self, id: NodeId) -> ValidityState {
        let Some(elem) = self.element(id) else {
            return ValidityState::default();
        };
        if let Some(validity) = elem.control.as_ref().and_then(|s| s.validity_override) {
            return validity;
        }
        let constraints = ValidationConstraints::from_element(elem);
        constraints.validate(&self.value(id), self.files(id))
    }

    /// Whether a control takes part in constraint validation
    pub fn will_validate(&self, id: NodeId) -> bool {
        let Some(kind) = self.control_kind(id) else {
            return false;
        };
        let barred = match kind {
            ControlKind::Input(t) => t.is_button() || t == InputType::Hidden,
            ControlKind::Button { .. } => true,
            ControlKind::Textarea | ControlKind::Select => false,
        };
        !barred && !self.is_disabled(id)
    }

    /// Disabled directly or through an ancestor fieldset
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.has_attribute(id, "disabled")
            || self.tree.ancestors(id)
                .any(|a| self.tag_name(a) == Some("fieldset") && self.has_attribute(a, "disabled"))
    }

    /// `form.checkValidity()`: every validating control in the form is valid
    pub fn form_is_valid(&self, form: NodeId) -> bool {
        self.tree.descendants(form)
            .filter(|&id| self.will_validate(id))
            .all(|id| self.validity(id).is_valid())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
