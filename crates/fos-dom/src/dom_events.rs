//! DOM Events
//!
//! User interaction and mutation events delivered to event listeners.

use crate::NodeId;

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEventType {
    /// The value of a control changed while editing
    Input,
    /// A committed value change (file picked, selection made)
    Change,
    /// A node was inserted into the document
    NodeInserted,
}

impl DomEventType {
    /// Whether the event reports a value-changing interaction
    pub fn changes_value(&self) -> bool {
        matches!(self, Self::Input | Self::Change)
    }
}

/// DOM event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub event_type: DomEventType,
    pub target: NodeId,
    pub related_node: Option<NodeId>,
    pub bubbles: bool,
}

impl DomEvent {
    fn new(event_type: DomEventType, target: NodeId, related_node: Option<NodeId>) -> Self {
        Self {
            event_type,
            target,
            related_node,
            bubbles: true,
        }
    }

    /// Create input event
    pub fn input(target: NodeId) -> Self {
        Self::new(DomEventType::Input, target, None)
    }

    /// Create change event
    pub fn change(target: NodeId) -> Self {
        Self::new(DomEventType::Change, target, None)
    }

    /// Create node inserted event
    pub fn node_inserted(target: NodeId, parent: NodeId) -> Self {
        Self::new(DomEventType::NodeInserted, target, Some(parent))
    }
}
