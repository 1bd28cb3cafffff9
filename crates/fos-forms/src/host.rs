//! Host document boundary
//!
//! Everything the validation layer needs from the document: attribute and
//! class access, control values, the platform validity vector and tree
//! navigation. `fos_dom::Document` is the in-tree implementation.

use fos_dom::forms::{ControlKind, SelectedFile, ValidityState};
use fos_dom::{Document, NodeId};

/// Document operations used by the resolver, synchronizer and engine
pub trait FormHost {
    /// Lowercase tag name, `None` for non-elements
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn text(&self, node: NodeId) -> String;

    fn set_text(&mut self, node: NodeId, text: &str);

    /// Form-associated element kind
    fn control_kind(&self, node: NodeId) -> Option<ControlKind>;

    /// Current control value
    fn value(&self, node: NodeId) -> String;

    /// Files selected in a file control
    fn files(&self, node: NodeId) -> &[SelectedFile];

    /// Platform validity vector of a control
    fn validity(&self, node: NodeId) -> ValidityState;

    /// Overall platform validity of a form
    fn form_is_valid(&self, form: NodeId) -> bool;

    /// Descendants of `root` in document order, excluding `root`
    fn descendants(&self, root: NodeId) -> Vec<NodeId>;

    /// Ancestors of `node`, nearest first
    fn ancestors(&self, node: NodeId) -> Vec<NodeId>;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// First element matching a selector, `None` when nothing matches or the selector is unsupported
    fn query_selector(&self, selector: &str) -> Option<NodeId>;
}

impl FormHost for Document {
    fn tag_name(&self, node: NodeId) -> Option<&str> {
        Document::tag_name(self, node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get_attribute(node, name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        Document::set_attribute(self, node, name, value);
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        Document::remove_attribute(self, node, name);
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        Document::has_class(self, node, class)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        Document::add_class(self, node, class);
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        Document::remove_class(self, node, class);
    }

    fn text(&self, node: NodeId) -> String {
        self.text_content(node)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.set_text_content(node, text);
    }

    fn control_kind(&self, node: NodeId) -> Option<ControlKind> {
        Document::control_kind(self, node)
    }

    fn value(&self, node: NodeId) -> String {
        Document::value(self, node)
    }

    fn files(&self, node: NodeId) -> &[SelectedFile] {
        Document::files(self, node)
    }

    fn validity(&self, node: NodeId) -> ValidityState {
        Document::validity(self, node)
    }

    fn form_is_valid(&self, form: NodeId) -> bool {
        Document::form_is_valid(self, form)
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        self.tree().descendants(root).collect()
    }

    fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        self.tree().ancestors(node).collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        Document::query_selector(self, selector)
    }
}
