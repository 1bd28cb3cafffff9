//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree plus the host side of HTML constraint validation:
//! control values, file selections and the nine-flag validity vector.

mod node;
mod tree;
mod document;
mod class_list;
mod query;
pub mod dom_events;
pub mod forms;

pub use node::{Node, NodeData, ElementData, ControlState, TextData, Attribute};
pub use tree::{DomTree, Children, Descendants};
pub use document::Document;
pub use class_list::DOMTokenList;
pub use query::{Selector, SimpleSelector};
pub use dom_events::{DomEvent, DomEventType};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check this is not the `NONE` sentinel
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
